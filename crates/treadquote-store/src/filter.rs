//! PostgREST-style filter operators.
//!
//! Each filter encodes as one query parameter: the column name maps to
//! `op.value`. The store matches all supplied filters conjunctively.

use std::fmt::Display;

/// A single column predicate.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Exact equality: `col=eq.value`.
    Eq(&'static str, String),
    /// Case-insensitive pattern match: `col=ilike.pattern` (`*` wildcard).
    Ilike(&'static str, String),
    /// Membership: `col=in.(v1,v2,…)`. Callers are responsible for keeping
    /// the list under [`crate::IN_LIST_MAX`].
    In(&'static str, Vec<i64>),
    /// Lower bound (inclusive): `col=gte.value`.
    Gte(&'static str, String),
    /// Upper bound (inclusive): `col=lte.value`.
    Lte(&'static str, String),
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Display) -> Self {
        Filter::Eq(column, value.to_string())
    }

    /// Case-insensitive exact match (no wildcards added).
    pub fn ilike(column: &'static str, pattern: impl Display) -> Self {
        Filter::Ilike(column, pattern.to_string())
    }

    /// Case-insensitive substring match (`*pattern*`).
    pub fn contains(column: &'static str, needle: impl Display) -> Self {
        Filter::Ilike(column, format!("*{needle}*"))
    }

    pub fn any_of(column: &'static str, ids: Vec<i64>) -> Self {
        Filter::In(column, ids)
    }

    pub fn gte(column: &'static str, value: impl Display) -> Self {
        Filter::Gte(column, value.to_string())
    }

    pub fn lte(column: &'static str, value: impl Display) -> Self {
        Filter::Lte(column, value.to_string())
    }

    /// Renders the filter as a `(column, operator.value)` query pair.
    pub(crate) fn to_query_pair(&self) -> (&'static str, String) {
        match self {
            Filter::Eq(col, v) => (col, format!("eq.{v}")),
            Filter::Ilike(col, p) => (col, format!("ilike.{p}")),
            Filter::In(col, ids) => {
                let list = ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                (col, format!("in.({list})"))
            }
            Filter::Gte(col, v) => (col, format!("gte.{v}")),
            Filter::Lte(col, v) => (col, format!("lte.{v}")),
        }
    }
}
