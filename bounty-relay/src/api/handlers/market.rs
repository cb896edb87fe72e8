use actix_web::web::{Data, Path};
use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use bounty_chains::{describe, ChainRegistry};

use crate::infrastructure::market::MarketDataClient;
use crate::middleware::error_handling::ErrorResponseBuilder;

#[get("/chains")]
pub async fn get_supported_chains(registry: Data<Arc<ChainRegistry>>) -> impl Responder {
    let chains: Vec<serde_json::Value> = registry
        .labels()
        .map(|label| {
            json!({
                "label": label,
                "platform_id": registry.platform_id(label),
            })
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "chains": chains,
        "count": chains.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/chains/{label}")]
pub async fn get_chain_info(
    label: Path<String>,
    registry: Data<Arc<ChainRegistry>>,
) -> impl Responder {
    HttpResponse::Ok().json(describe(registry.get_ref(), Some(&label)))
}

/// Debug path straight to the market-data provider. Failures are propagated as
/// they came back, no retry.
#[get("/market/platforms")]
pub async fn get_asset_platforms(client: Data<Arc<MarketDataClient>>) -> impl Responder {
    match client.fetch_asset_platforms().await {
        Ok(platforms) => HttpResponse::Ok().json(json!({
            "platforms": platforms,
            "count": platforms.len(),
            "timestamp": Utc::now().to_rfc3339(),
        })),
        Err(e) => ErrorResponseBuilder::bad_gateway(&format!("Asset platform fetch failed: {e}")),
    }
}
