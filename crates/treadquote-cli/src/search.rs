//! `treadquote search` — run one comparison and print the ranking.

use treadquote_engine::{rank, run_search, SearchParams};
use treadquote_store::StoreClient;

pub(crate) async fn run(store: &StoreClient, params: SearchParams) -> anyhow::Result<()> {
    let sort = params.sort;
    let results = run_search(store, &params).await?;

    if results.is_empty() {
        tracing::debug!("search produced no comparison results");
        println!("no matches");
        return Ok(());
    }

    let ranked = rank(results, sort);
    println!(
        "{} offers (quantity {}, installation {})",
        ranked.len(),
        params.quantity,
        if params.installation { "included" } else { "excluded" }
    );
    for offer in &ranked {
        let result = &offer.result;
        let badge = if offer.is_best { "*" } else { " " };
        println!(
            "{badge} {total:>10}  {shop} ({city}, {province})  {brand} {model} {size}  \
             {price}/tire  rating {rating:.1}",
            total = result.total_price,
            shop = result.shop_name,
            city = result.city,
            province = result.province,
            brand = result.brand,
            model = result.model,
            size = result.size,
            price = result.price_per_tire,
            rating = result.rating,
        );
    }

    Ok(())
}
