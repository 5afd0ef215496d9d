//! Inventory Fetcher: raw in-stock offer rows matching the tire filters.

use treadquote_store::{tables, Filter, OfferRow, RowRange, StoreClient, PAGE_CEILING};

use crate::error::EngineError;
use crate::params::SearchParams;

/// Fetches inventory rows matching the supplied category/size/brand and
/// price-bound predicates, plus the implicit `in_stock = true`.
///
/// Location filtering is deliberately NOT pushed into this query: the shop-id
/// set from the Location Resolver can exceed the store's practical `in.(…)`
/// list ceiling, so the intersection happens in memory at the join step.
///
/// # Errors
///
/// Propagates [`EngineError::Store`] if the offer query fails.
pub async fn fetch_offers(
    store: &StoreClient,
    params: &SearchParams,
) -> Result<Vec<OfferRow>, EngineError> {
    let mut filters = vec![Filter::eq("in_stock", true)];
    if let Some(category_id) = params.category_id {
        filters.push(Filter::eq("category_id", category_id));
    }
    if let Some(size_id) = params.size_id {
        filters.push(Filter::eq("size_id", size_id));
    }
    if let Some(brand_id) = params.brand_id {
        filters.push(Filter::eq("brand_id", brand_id));
    }
    if let Some(min_price) = params.min_price {
        filters.push(Filter::gte("price", min_price));
    }
    if let Some(max_price) = params.max_price {
        filters.push(Filter::lte("price", max_price));
    }

    let offers: Vec<OfferRow> = store
        .select(
            tables::OFFERS,
            "*",
            &filters,
            Some(RowRange::first(PAGE_CEILING)),
        )
        .await?;

    tracing::debug!(count = offers.len(), "inventory offers fetched");
    Ok(offers)
}
