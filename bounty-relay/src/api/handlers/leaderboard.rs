use actix_web::web::{Data, Path};
use actix_web::{get, HttpResponse};
use std::sync::Arc;

use crate::app::leaderboard_service::LeaderboardService;
use crate::domain::error::RelayError;

#[get("/campaigns/{id}/leaderboard")]
pub async fn campaign_leaderboard(
    id: Path<String>,
    service: Data<Arc<LeaderboardService>>,
) -> Result<HttpResponse, RelayError> {
    let leaderboard = service.campaign_leaderboard(&id).map_err(|e| {
        let message = e.to_string();
        if message.contains("not found") {
            RelayError::NotFound(message)
        } else {
            RelayError::Storage(message)
        }
    })?;
    Ok(HttpResponse::Ok().json(leaderboard))
}

#[get("/leaderboard")]
pub async fn platform_leaderboard(
    service: Data<Arc<LeaderboardService>>,
) -> Result<HttpResponse, RelayError> {
    Ok(HttpResponse::Ok().json(service.platform_leaderboard()))
}
