//! HTTP client for the tire-directory row store.
//!
//! The backend is a PostgREST-style REST endpoint: one GET route per table,
//! filters encoded as query-parameter operators (`eq.`, `ilike.`, `in.(…)`,
//! `gte.`, `lte.`), and a hard per-request row ceiling. There is no
//! server-side join capability — callers fetch fact and reference tables
//! separately and join in memory.

mod client;
mod error;
mod filter;
mod rows;

pub use client::{RowRange, StoreClient, IN_LIST_MAX, PAGE_CEILING};
pub use error::StoreError;
pub use filter::Filter;
pub use rows::{tables, OfferRow, ReferenceRow, ShopIdRow, ShopPlaceRow, ShopRow};
