//! Search orchestration: the full pipeline plus the stale-response guard.

use std::sync::atomic::{AtomicU64, Ordering};

use treadquote_store::StoreClient;

use crate::compare::{build_results, ComparisonResult};
use crate::error::EngineError;
use crate::inventory::fetch_offers;
use crate::location::resolve_location;
use crate::params::SearchParams;
use crate::reference::load_reference_maps;

/// Runs one search end to end: resolve location, fetch offers, load
/// references, join and price. Results come back in fetch order; callers
/// pass them to [`crate::rank`] for display ordering.
///
/// A location filter matching zero shops terminates immediately with an
/// empty result — a deliberate empty set, not an error, and no inventory
/// fetch is attempted.
///
/// # Errors
///
/// - [`EngineError::InvalidQuantity`] when `params.quantity` is zero.
/// - [`EngineError::Store`] when any fetch fails; the whole search aborts
///   with no partial results.
pub async fn run_search(
    store: &StoreClient,
    params: &SearchParams,
) -> Result<Vec<ComparisonResult>, EngineError> {
    params.validate()?;

    let scope = resolve_location(
        store,
        params.province.as_deref(),
        params.city.as_deref(),
    )
    .await?;
    if scope.is_empty_restriction() {
        tracing::debug!("location filter matched no shops, returning empty result");
        return Ok(Vec::new());
    }

    let offers = fetch_offers(store, params).await?;
    if offers.is_empty() {
        return Ok(Vec::new());
    }

    let refs = load_reference_maps(store, &offers, &scope).await?;
    Ok(build_results(
        offers,
        &refs,
        &scope,
        params.quantity,
        params.installation,
    ))
}

/// Outcome of a coordinated search.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The search finished and was still the latest one issued.
    Completed(Vec<ComparisonResult>),
    /// A newer search was issued while this one was in flight; its results
    /// were discarded rather than merged.
    Superseded,
}

/// Guards against stale responses when filter parameters change while a
/// search is in flight.
///
/// Each search is keyed by a monotonically increasing token; a completed
/// search whose token is no longer the latest is reported as
/// [`SearchOutcome::Superseded`] and its results dropped on arrival.
#[derive(Debug, Default)]
pub struct SearchCoordinator {
    latest: AtomicU64,
}

impl SearchCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next request token, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the latest issued.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    /// Runs [`run_search`] under this coordinator's token discipline.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`run_search`]. Errors from a superseded search
    /// still propagate; the caller decides whether to show them.
    pub async fn search(
        &self,
        store: &StoreClient,
        params: &SearchParams,
    ) -> Result<SearchOutcome, EngineError> {
        let token = self.issue();
        let results = run_search(store, params).await?;

        if self.is_current(token) {
            Ok(SearchOutcome::Completed(results))
        } else {
            tracing::warn!(token, "discarding superseded search results");
            Ok(SearchOutcome::Superseded)
        }
    }
}
