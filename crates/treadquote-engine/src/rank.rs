//! Ranker/Filter: order comparison results and annotate the best offer.

use crate::compare::ComparisonResult;
use crate::params::SortMode;

/// A comparison result with its sort-position annotation.
///
/// `is_best` is purely presentational: true only for index 0 of the active
/// sort (cheapest total under price sort, highest rated under rating sort).
/// It is recomputed by [`rank`] whenever the sort mode changes — no refetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOffer {
    pub result: ComparisonResult,
    pub is_best: bool,
}

/// Sorts results by the selected mode and flags the first element.
///
/// Both modes use a stable sort: no secondary key is defined, so ties keep
/// their original fetch order and identical data re-ranks deterministically.
#[must_use]
pub fn rank(mut results: Vec<ComparisonResult>, mode: SortMode) -> Vec<RankedOffer> {
    match mode {
        SortMode::PriceAscending => {
            results.sort_by(|a, b| a.total_price.cmp(&b.total_price));
        }
        SortMode::RatingDescending => {
            results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
    }

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| RankedOffer {
            result,
            is_best: index == 0,
        })
        .collect()
}
