//! `treadquote stats` — print the landing-page directory counts.

use treadquote_engine::collect_directory_stats;
use treadquote_store::StoreClient;

pub(crate) async fn run(store: &StoreClient) -> anyhow::Result<()> {
    let stats = collect_directory_stats(store).await?;

    println!(
        "{} shops across {} provinces and {} cities",
        stats.total_shops, stats.province_count, stats.city_count
    );

    println!("\ntop provinces:");
    for entry in &stats.top_provinces {
        println!("  {:>5}  {}", entry.shops, entry.province);
    }

    println!("\ntop cities:");
    for entry in &stats.top_cities {
        println!("  {:>5}  {}, {}", entry.shops, entry.city, entry.province);
    }

    Ok(())
}
