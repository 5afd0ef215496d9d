//! Statistics Aggregator: landing-page directory counts.
//!
//! A one-time pass with no joins and no pricing; it shares the batched
//! fetch contract and failure semantics with the comparison engine.

use std::collections::BTreeMap;

use treadquote_store::{tables, ShopPlaceRow, StoreClient};

use crate::error::EngineError;

/// Number of provinces shown on the landing page.
pub const TOP_PROVINCES: usize = 10;
/// Number of cities shown on the landing page.
pub const TOP_CITIES: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceCount {
    pub province: String,
    pub shops: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCount {
    pub city: String,
    pub province: String,
    pub shops: usize,
}

/// Aggregated directory counts for the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total_shops: usize,
    pub province_count: usize,
    /// Distinct (province, city) pairs — the same city name in two
    /// provinces counts twice.
    pub city_count: usize,
    /// Descending by shop count, capped at [`TOP_PROVINCES`].
    pub top_provinces: Vec<ProvinceCount>,
    /// Descending by shop count, capped at [`TOP_CITIES`].
    pub top_cities: Vec<CityCount>,
}

/// Enumerates every shop row's location columns in row-ceiling batches and
/// aggregates the directory counts.
///
/// # Errors
///
/// Propagates [`EngineError::Store`] from the first failed batch; no
/// partial statistics are produced.
pub async fn collect_directory_stats(store: &StoreClient) -> Result<DirectoryStats, EngineError> {
    let rows: Vec<ShopPlaceRow> = store
        .select_all(tables::SHOPS, "id,city,province", &[])
        .await?;
    Ok(summarize(&rows))
}

/// Pure aggregation over the fetched location rows.
///
/// Count ties break by name ascending so repeated runs over unchanged data
/// render identically.
fn summarize(rows: &[ShopPlaceRow]) -> DirectoryStats {
    let mut by_province: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_city: BTreeMap<(&str, &str), usize> = BTreeMap::new();

    for row in rows {
        *by_province.entry(&row.province).or_default() += 1;
        *by_city
            .entry((row.province.as_str(), row.city.as_str()))
            .or_default() += 1;
    }

    let province_count = by_province.len();
    let city_count = by_city.len();

    // BTreeMap iteration is name-ascending; the stable sort by count
    // descending keeps that as the tie-break.
    let mut top_provinces: Vec<ProvinceCount> = by_province
        .into_iter()
        .map(|(province, shops)| ProvinceCount {
            province: province.to_owned(),
            shops,
        })
        .collect();
    top_provinces.sort_by(|a, b| b.shops.cmp(&a.shops));
    top_provinces.truncate(TOP_PROVINCES);

    let mut top_cities: Vec<CityCount> = by_city
        .into_iter()
        .map(|((province, city), shops)| CityCount {
            city: city.to_owned(),
            province: province.to_owned(),
            shops,
        })
        .collect();
    top_cities.sort_by(|a, b| b.shops.cmp(&a.shops));
    top_cities.truncate(TOP_CITIES);

    DirectoryStats {
        total_shops: rows.len(),
        province_count,
        city_count,
        top_provinces,
        top_cities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i64, city: &str, province: &str) -> ShopPlaceRow {
        ShopPlaceRow {
            id,
            city: city.to_owned(),
            province: province.to_owned(),
        }
    }

    #[test]
    fn summarize_counts_provinces_and_cities() {
        let rows = vec![
            place(1, "Laval", "Quebec"),
            place(2, "Laval", "Quebec"),
            place(3, "Gatineau", "Quebec"),
            place(4, "Ottawa", "Ontario"),
        ];
        let stats = summarize(&rows);
        assert_eq!(stats.total_shops, 4);
        assert_eq!(stats.province_count, 2);
        assert_eq!(stats.city_count, 3);
        assert_eq!(stats.top_provinces[0].province, "Quebec");
        assert_eq!(stats.top_provinces[0].shops, 3);
        assert_eq!(stats.top_cities[0].city, "Laval");
        assert_eq!(stats.top_cities[0].shops, 2);
    }

    #[test]
    fn same_city_name_in_two_provinces_counts_twice() {
        let rows = vec![
            place(1, "Springfield", "Ontario"),
            place(2, "Springfield", "Manitoba"),
        ];
        let stats = summarize(&rows);
        assert_eq!(stats.city_count, 2);
    }

    #[test]
    fn count_ties_break_by_name_ascending() {
        let rows = vec![
            place(1, "Brossard", "Quebec"),
            place(2, "Anjou", "Quebec"),
        ];
        let stats = summarize(&rows);
        assert_eq!(stats.top_cities[0].city, "Anjou");
        assert_eq!(stats.top_cities[1].city, "Brossard");
    }

    #[test]
    fn top_lists_are_capped() {
        let rows: Vec<ShopPlaceRow> = (0..20)
            .map(|i| place(i, &format!("City {i:02}"), &format!("Province {i:02}")))
            .collect();
        let stats = summarize(&rows);
        assert_eq!(stats.top_provinces.len(), TOP_PROVINCES);
        assert_eq!(stats.top_cities.len(), TOP_CITIES);
    }

    #[test]
    fn empty_directory_summarizes_to_zeroes() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_shops, 0);
        assert_eq!(stats.province_count, 0);
        assert!(stats.top_cities.is_empty());
    }
}
