//! Request-scoped search parameters.
//!
//! One immutable value threaded through the whole pipeline — no ambient
//! state. The wizard/UI that collects these is out of scope; it hands the
//! engine a flat set of optional fields.

use rust_decimal::Decimal;

use crate::error::EngineError;

/// Result ordering, selected by the caller. The two modes are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Cheapest total price first.
    PriceAscending,
    /// Highest shop rating first (absent rating sorts as 0).
    RatingDescending,
}

/// A user's tire requirement. Absent id filters mean "any".
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub category_id: Option<i64>,
    pub size_id: Option<i64>,
    pub brand_id: Option<i64>,
    /// Number of tires quoted; typical domain values are 1, 2, and 4.
    pub quantity: u32,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Whether the quoted total includes per-tire installation.
    pub installation: bool,
    /// Full province name, matched case-insensitively.
    pub province: Option<String>,
    /// City substring, matched case-insensitively.
    pub city: Option<String>,
    pub sort: SortMode,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            category_id: None,
            size_id: None,
            brand_id: None,
            quantity: 4,
            min_price: None,
            max_price: None,
            installation: false,
            province: None,
            city: None,
            sort: SortMode::PriceAscending,
        }
    }
}

impl SearchParams {
    /// Rejects parameter combinations the engine refuses to guess about.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuantity`] when `quantity` is zero.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.quantity == 0 {
            return Err(EngineError::InvalidQuantity(self.quantity));
        }
        Ok(())
    }

    /// True when either location field is present.
    #[must_use]
    pub fn has_location_filter(&self) -> bool {
        self.province.is_some() || self.city.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quantity_is_four() {
        let params = SearchParams::default();
        assert_eq!(params.quantity, 4);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let params = SearchParams {
            quantity: 0,
            ..SearchParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn location_filter_detection() {
        let mut params = SearchParams::default();
        assert!(!params.has_location_filter());
        params.city = Some("Laval".to_owned());
        assert!(params.has_location_filter());
    }
}
