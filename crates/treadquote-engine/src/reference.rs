//! Reference Joiner: id-keyed lookup maps for shops, brands, categories,
//! and sizes.
//!
//! The four tables are independent, so they are fetched with a concurrent
//! fan-out and awaited jointly. Within one table, id lists larger than the
//! store's practical `in.(…)` ceiling are split into chunked requests.

use std::collections::{HashMap, HashSet};

use futures::future::try_join_all;
use serde::de::DeserializeOwned;

use treadquote_store::{
    tables, Filter, OfferRow, ReferenceRow, RowRange, ShopRow, StoreClient, StoreError,
    IN_LIST_MAX, PAGE_CEILING,
};

use crate::error::EngineError;
use crate::location::LocationScope;

/// The four id→entity lookup maps the aggregation step joins against.
///
/// A reference table returning fewer rows than requested (deleted shops,
/// stale foreign keys) simply leaves keys absent; the join treats a missing
/// key as "unresolved", never as an error.
#[derive(Debug, Default)]
pub struct ReferenceMaps {
    pub shops: HashMap<i64, ShopRow>,
    pub brands: HashMap<i64, ReferenceRow>,
    pub categories: HashMap<i64, ReferenceRow>,
    pub sizes: HashMap<i64, ReferenceRow>,
}

/// Loads the reference maps for the given offer rows.
///
/// Only identifiers actually referenced by `offers` are fetched. Shop ids
/// additionally intersect an active [`LocationScope`] up front — shops
/// outside the scope can never join, so fetching them would be wasted rows.
///
/// # Errors
///
/// Propagates [`EngineError::Store`] from the first failed fetch; the whole
/// fan-out aborts.
pub async fn load_reference_maps(
    store: &StoreClient,
    offers: &[OfferRow],
    scope: &LocationScope,
) -> Result<ReferenceMaps, EngineError> {
    let shop_ids: Vec<i64> = distinct_ids(offers, |offer| offer.shop_id)
        .into_iter()
        .filter(|id| scope.admits(*id))
        .collect();
    let brand_ids = distinct_ids(offers, |offer| offer.brand_id);
    let category_ids = distinct_ids(offers, |offer| offer.category_id);
    let size_ids = distinct_ids(offers, |offer| offer.size_id);

    let (shops, brands, categories, sizes) = tokio::try_join!(
        fetch_by_ids::<ShopRow>(store, tables::SHOPS, shop_ids),
        fetch_by_ids::<ReferenceRow>(store, tables::BRANDS, brand_ids),
        fetch_by_ids::<ReferenceRow>(store, tables::CATEGORIES, category_ids),
        fetch_by_ids::<ReferenceRow>(store, tables::SIZES, size_ids),
    )?;

    Ok(ReferenceMaps {
        shops: shops.into_iter().map(|row| (row.id, row)).collect(),
        brands: brands.into_iter().map(|row| (row.id, row)).collect(),
        categories: categories.into_iter().map(|row| (row.id, row)).collect(),
        sizes: sizes.into_iter().map(|row| (row.id, row)).collect(),
    })
}

/// Distinct identifiers referenced by the offers, in first-seen order.
fn distinct_ids(offers: &[OfferRow], key: impl Fn(&OfferRow) -> i64) -> Vec<i64> {
    let mut seen = HashSet::new();
    offers
        .iter()
        .map(key)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Fetches rows from `table` whose id is in `ids`, chunking the list at
/// [`IN_LIST_MAX`] and issuing the chunks concurrently.
async fn fetch_by_ids<T: DeserializeOwned>(
    store: &StoreClient,
    table: &str,
    ids: Vec<i64>,
) -> Result<Vec<T>, StoreError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let requests = ids.chunks(IN_LIST_MAX).map(|chunk| {
        let filters = vec![Filter::any_of("id", chunk.to_vec())];
        async move {
            store
                .select::<T>(table, "*", &filters, Some(RowRange::first(PAGE_CEILING)))
                .await
        }
    });

    let batches = try_join_all(requests).await?;
    Ok(batches.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn offer(id: i64, shop_id: i64, brand_id: i64) -> OfferRow {
        OfferRow {
            id,
            shop_id,
            brand_id,
            category_id: 1,
            size_id: 1,
            model: "test".to_owned(),
            price: Decimal::new(10000, 2),
            installation_price: None,
            in_stock: true,
            warranty_months: None,
        }
    }

    #[test]
    fn distinct_ids_deduplicates_in_first_seen_order() {
        let offers = vec![offer(1, 30, 7), offer(2, 10, 7), offer(3, 30, 8)];
        assert_eq!(distinct_ids(&offers, |o| o.shop_id), vec![30, 10]);
        assert_eq!(distinct_ids(&offers, |o| o.brand_id), vec![7, 8]);
    }

    #[test]
    fn scope_filters_shop_ids_before_fetch() {
        let offers = vec![offer(1, 30, 7), offer(2, 10, 7)];
        let scope = LocationScope::Only([10].into_iter().collect());
        let shop_ids: Vec<i64> = distinct_ids(&offers, |o| o.shop_id)
            .into_iter()
            .filter(|id| scope.admits(*id))
            .collect();
        assert_eq!(shop_ids, vec![10]);
    }
}
