//! `search` command: run the matching engine once and print JSON.

use std::sync::Arc;
use std::time::Duration;

use vendora_core::{BudgetRange, MatchingConfig, SearchRequest, VendorCatalog};
use vendora_matching::{geo::validate_coordinate, InMemoryCatalog, MatchEngine};

use crate::SearchArgs;

pub(crate) async fn run_search(args: SearchArgs) -> anyhow::Result<()> {
    let matching = Arc::new(vendora_core::load_matching_config(&args.matching)?);
    let timeout = Duration::from_millis(args.timeout_ms);
    let request = build_request(&args, &matching)?;

    let json = match &args.catalog {
        Some(path) => {
            let vendors = vendora_core::load_vendor_catalog(path)?;
            search_json(InMemoryCatalog::new(vendors), matching, timeout, request).await?
        }
        None => {
            let config = vendora_core::load_app_config()?;
            let pool = vendora_db::connect_pool(
                &config.database_url,
                vendora_db::PoolConfig::from_app_config(&config),
            )
            .await?;
            let catalog = vendora_db::PgVendorCatalog::new(pool);
            search_json(catalog, matching, timeout, request).await?
        }
    };

    println!("{json}");
    Ok(())
}

async fn search_json<C: VendorCatalog>(
    catalog: C,
    matching: Arc<MatchingConfig>,
    timeout: Duration,
    request: SearchRequest,
) -> anyhow::Result<String> {
    let engine = MatchEngine::new(catalog, matching).with_catalog_timeout(timeout);
    let response = engine.search(request).await?;
    Ok(serde_json::to_string_pretty(&response)?)
}

pub(crate) fn build_request(
    args: &SearchArgs,
    matching: &MatchingConfig,
) -> anyhow::Result<SearchRequest> {
    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(validate_coordinate(lat, lon)?),
        _ => None,
    };

    Ok(SearchRequest {
        query: args.query.clone(),
        category: args.category.clone(),
        location,
        city: args.city.clone(),
        area: args.area.clone(),
        budget: BudgetRange::from_bounds(args.budget_min, args.budget_max),
        radius_km: args.radius_km.unwrap_or(matching.thresholds.default_radius_km),
        sort: args.sort,
        page: args.page,
        page_size: args
            .page_size
            .unwrap_or(matching.thresholds.default_page_size),
    })
}
