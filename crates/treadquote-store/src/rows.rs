//! Typed rows for the directory's fact and reference tables.
//!
//! These mirror the remote schema one-to-one; derived/joined shapes live in
//! the engine crate. All price columns deserialize into [`Decimal`] so that
//! downstream arithmetic stays exact.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Table names as they exist in the remote store.
pub mod tables {
    pub const SHOPS: &str = "shops";
    pub const OFFERS: &str = "tire_offers";
    pub const BRANDS: &str = "tire_brands";
    pub const CATEGORIES: &str = "tire_categories";
    pub const SIZES: &str = "tire_sizes";
}

/// A full shop listing row.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub province: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ShopRow {
    /// Average rating with "no rating yet" collapsing to 0.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Identifier-only projection of a shop row (`select=id`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShopIdRow {
    pub id: i64,
}

/// Location projection of a shop row (`select=id,city,province`), used by
/// the directory statistics pass.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopPlaceRow {
    pub id: i64,
    pub city: String,
    pub province: String,
}

/// One shop's priced tire inventory row.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferRow {
    pub id: i64,
    pub shop_id: i64,
    pub brand_id: i64,
    pub category_id: i64,
    pub size_id: i64,
    pub model: String,
    pub price: Decimal,
    #[serde(default)]
    pub installation_price: Option<Decimal>,
    pub in_stock: bool,
    #[serde(default)]
    pub warranty_months: Option<i32>,
}

/// A brand, category, or size lookup row.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRow {
    pub id: i64,
    pub name: String,
}
