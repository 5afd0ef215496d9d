//! Location Resolver: optional province/city filters become a shop-id scope.

use std::collections::HashSet;

use treadquote_store::{tables, Filter, RowRange, ShopIdRow, StoreClient, PAGE_CEILING};

use crate::error::EngineError;

/// The shop-id restriction derived from the caller's location filters.
#[derive(Debug, Clone)]
pub enum LocationScope {
    /// No location filter was requested; every shop is admissible.
    Unrestricted,
    /// Only these shop ids are admissible. An empty set means the location
    /// filter matched nothing — the search must terminate empty rather than
    /// fall through to an unfiltered fetch.
    Only(HashSet<i64>),
}

impl LocationScope {
    /// Whether `shop_id` passes this scope.
    #[must_use]
    pub fn admits(&self, shop_id: i64) -> bool {
        match self {
            LocationScope::Unrestricted => true,
            LocationScope::Only(ids) => ids.contains(&shop_id),
        }
    }

    /// True when a location filter was applied and matched zero shops.
    #[must_use]
    pub fn is_empty_restriction(&self) -> bool {
        matches!(self, LocationScope::Only(ids) if ids.is_empty())
    }
}

/// Resolves optional province/city filters to a [`LocationScope`].
///
/// No filters → [`LocationScope::Unrestricted`] without touching the store.
/// Otherwise one id-only query: exact province match (case-insensitive)
/// and/or partial city match (case-insensitive substring).
///
/// # Errors
///
/// Propagates [`EngineError::Store`] if the shop query fails.
pub async fn resolve_location(
    store: &StoreClient,
    province: Option<&str>,
    city: Option<&str>,
) -> Result<LocationScope, EngineError> {
    if province.is_none() && city.is_none() {
        return Ok(LocationScope::Unrestricted);
    }

    let mut filters = Vec::new();
    if let Some(province) = province {
        filters.push(Filter::ilike("province", province));
    }
    if let Some(city) = city {
        filters.push(Filter::contains("city", city));
    }

    let rows: Vec<ShopIdRow> = store
        .select(
            tables::SHOPS,
            "id",
            &filters,
            Some(RowRange::first(PAGE_CEILING)),
        )
        .await?;

    let ids: HashSet<i64> = rows.into_iter().map(|row| row.id).collect();
    tracing::debug!(matched = ids.len(), "location filter resolved");
    Ok(LocationScope::Only(ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_admits_everything() {
        assert!(LocationScope::Unrestricted.admits(42));
        assert!(!LocationScope::Unrestricted.is_empty_restriction());
    }

    #[test]
    fn only_admits_members() {
        let scope = LocationScope::Only([1, 2].into_iter().collect());
        assert!(scope.admits(1));
        assert!(!scope.admits(3));
        assert!(!scope.is_empty_restriction());
    }

    #[test]
    fn empty_restriction_is_detected() {
        let scope = LocationScope::Only(HashSet::new());
        assert!(scope.is_empty_restriction());
        assert!(!scope.admits(1));
    }
}
