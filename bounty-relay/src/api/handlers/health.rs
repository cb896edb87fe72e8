use actix_web::web::Data;
use actix_web::{get, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::storage::file_storage::Storage;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Bounty Relay Server is running"
    }))
}

#[get("/health/detailed")]
pub async fn detailed_health(storage: Data<Arc<Storage>>) -> impl Responder {
    let store_health = storage.check_health();
    let status = if store_health.is_healthy {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(json!({
        "status": status,
        "store": store_health,
        "metrics": storage.get_metrics(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
