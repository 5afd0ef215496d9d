//! Price-comparison and search-aggregation engine for the tire directory.
//!
//! The remote row store offers no server-side joins, so the engine fetches
//! fact and reference tables separately and stitches them together in
//! memory: resolve the location filter to a shop-id scope, fetch matching
//! in-stock offers, load the four reference tables (shops, brands,
//! categories, sizes) as id-keyed maps, join, price, and rank. Offers whose
//! references do not all resolve are dropped silently — stale foreign keys
//! are expected in a live catalog.

mod compare;
mod error;
mod inventory;
mod location;
mod params;
mod rank;
mod reference;
mod search;
mod stats;

pub use compare::{build_results, ComparisonResult};
pub use error::EngineError;
pub use inventory::fetch_offers;
pub use location::{resolve_location, LocationScope};
pub use params::{SearchParams, SortMode};
pub use rank::{rank, RankedOffer};
pub use reference::{load_reference_maps, ReferenceMaps};
pub use search::{run_search, SearchCoordinator, SearchOutcome};
pub use stats::{
    collect_directory_stats, CityCount, DirectoryStats, ProvinceCount, TOP_CITIES, TOP_PROVINCES,
};
