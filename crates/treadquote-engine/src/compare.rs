//! Aggregation & Pricing: join offer rows to the reference maps and compute
//! per-offer totals.

use rust_decimal::Decimal;

use treadquote_store::OfferRow;

use crate::location::LocationScope;
use crate::reference::ReferenceMaps;

/// The denormalized, priced projection of one offer — the unit the ranker
/// sorts and the presentation layer displays.
///
/// Constructed fresh on every search and never persisted. Exists only when
/// all four foreign references resolved; partial joins are dropped, never
/// surfaced as malformed results.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub offer_id: i64,
    pub shop_id: i64,
    pub shop_name: String,
    pub city: String,
    pub province: String,
    pub phone: Option<String>,
    /// Shop average rating; 0 when the shop has none yet.
    pub rating: f64,
    pub brand: String,
    pub category: String,
    pub size: String,
    pub model: String,
    pub price_per_tire: Decimal,
    pub total_price: Decimal,
    pub in_stock: bool,
    pub warranty_months: Option<i32>,
}

/// Per-offer quoted total, computed in exact decimal arithmetic.
///
/// `installation_price` contributes only when the caller requested
/// installation, and an offer without an installation price contributes 0
/// even then.
fn total_price(
    price: Decimal,
    installation_price: Option<Decimal>,
    quantity: u32,
    installation: bool,
) -> Decimal {
    let quantity = Decimal::from(quantity);
    let mut total = price * quantity;
    if installation {
        total += installation_price.unwrap_or(Decimal::ZERO) * quantity;
    }
    total
}

/// Joins fetched offers against the reference maps, producing one
/// [`ComparisonResult`] per fully-resolved offer in fetch order.
///
/// Dropped rows: shop id outside an active location scope, or any of the
/// four lookups missing. Both are per-row policy drops (warn-level trace,
/// nothing surfaced to the user).
#[must_use]
pub fn build_results(
    offers: Vec<OfferRow>,
    refs: &ReferenceMaps,
    scope: &LocationScope,
    quantity: u32,
    installation: bool,
) -> Vec<ComparisonResult> {
    let mut results = Vec::with_capacity(offers.len());

    for offer in offers {
        if !scope.admits(offer.shop_id) {
            continue;
        }

        let (Some(shop), Some(brand), Some(category), Some(size)) = (
            refs.shops.get(&offer.shop_id),
            refs.brands.get(&offer.brand_id),
            refs.categories.get(&offer.category_id),
            refs.sizes.get(&offer.size_id),
        ) else {
            tracing::warn!(
                offer_id = offer.id,
                shop_id = offer.shop_id,
                "dropping offer with unresolved reference"
            );
            continue;
        };

        results.push(ComparisonResult {
            offer_id: offer.id,
            shop_id: offer.shop_id,
            shop_name: shop.name.clone(),
            city: shop.city.clone(),
            province: shop.province.clone(),
            phone: shop.phone.clone(),
            rating: shop.rating_or_zero(),
            brand: brand.name.clone(),
            category: category.name.clone(),
            size: size.name.clone(),
            model: offer.model.clone(),
            price_per_tire: offer.price,
            total_price: total_price(
                offer.price,
                offer.installation_price,
                quantity,
                installation,
            ),
            in_stock: offer.in_stock,
            warranty_months: offer.warranty_months,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use treadquote_store::{ReferenceRow, ShopRow};

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("test decimal should parse")
    }

    fn shop(id: i64) -> ShopRow {
        ShopRow {
            id,
            name: format!("Shop {id}"),
            city: "Laval".to_owned(),
            province: "Quebec".to_owned(),
            phone: Some("450-555-0199".to_owned()),
            rating: Some(4.5),
            latitude: None,
            longitude: None,
        }
    }

    fn reference(id: i64, name: &str) -> ReferenceRow {
        ReferenceRow {
            id,
            name: name.to_owned(),
        }
    }

    fn offer(id: i64, shop_id: i64, brand_id: i64, price: &str, install: Option<&str>) -> OfferRow {
        OfferRow {
            id,
            shop_id,
            brand_id,
            category_id: 1,
            size_id: 1,
            model: "Model".to_owned(),
            price: dec(price),
            installation_price: install.map(dec),
            in_stock: true,
            warranty_months: Some(60),
        }
    }

    fn full_refs() -> ReferenceMaps {
        ReferenceMaps {
            shops: HashMap::from([(10, shop(10))]),
            brands: HashMap::from([(1, reference(1, "Michelin"))]),
            categories: HashMap::from([(1, reference(1, "Winter"))]),
            sizes: HashMap::from([(1, reference(1, "205/55R16"))]),
        }
    }

    #[test]
    fn total_includes_installation_when_requested() {
        let total = total_price(dec("100.00"), Some(dec("20.00")), 4, true);
        assert_eq!(total, dec("480.00"));
    }

    #[test]
    fn total_excludes_installation_when_not_requested() {
        let total = total_price(dec("100.00"), Some(dec("20.00")), 4, false);
        assert_eq!(total, dec("400.00"));
    }

    #[test]
    fn missing_installation_price_contributes_zero() {
        let total = total_price(dec("100.00"), None, 2, true);
        assert_eq!(total, dec("200.00"));
    }

    #[test]
    fn result_flattens_all_reference_names() {
        let refs = full_refs();
        let results = build_results(
            vec![offer(1, 10, 1, "142.99", Some("25.00"))],
            &refs,
            &LocationScope::Unrestricted,
            4,
            true,
        );
        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.shop_name, "Shop 10");
        assert_eq!(result.brand, "Michelin");
        assert_eq!(result.category, "Winter");
        assert_eq!(result.size, "205/55R16");
        assert_eq!(result.total_price, dec("671.96"));
        assert_eq!(result.warranty_months, Some(60));
    }

    #[test]
    fn offer_with_unknown_brand_is_dropped_without_error() {
        let refs = full_refs();
        // brand_id 99 does not exist in the brand map
        let results = build_results(
            vec![
                offer(1, 10, 99, "100.00", None),
                offer(2, 10, 1, "100.00", None),
            ],
            &refs,
            &LocationScope::Unrestricted,
            4,
            false,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].offer_id, 2);
    }

    #[test]
    fn offer_outside_location_scope_is_dropped() {
        let refs = full_refs();
        let scope = LocationScope::Only([999].into_iter().collect());
        let results = build_results(
            vec![offer(1, 10, 1, "100.00", None)],
            &refs,
            &scope,
            4,
            false,
        );
        assert!(results.is_empty());
    }
}
