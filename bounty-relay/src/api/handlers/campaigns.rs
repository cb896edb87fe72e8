use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::logger::Logger;
use crate::infrastructure::storage::file_storage::{Campaign, CampaignStatus, Storage};
use crate::middleware::error_handling::ErrorResponseBuilder;
use crate::validators::campaign_validator::CampaignValidator;

#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub description: String,
    pub host: String,
    pub reward_pool: f64,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CampaignStatus>,
}

#[derive(Debug, Deserialize)]
pub struct CampaignListQuery {
    pub status: Option<String>,
}

#[post("/campaigns")]
pub async fn create_campaign(
    req: Json<CreateCampaignRequest>,
    storage: Data<Arc<Storage>>,
) -> impl Responder {
    let validation = CampaignValidator::validate_create(
        &req.title,
        &req.description,
        &req.host,
        req.reward_pool,
        req.deadline,
    );
    if !validation.valid {
        return ErrorResponseBuilder::bad_request(&format!(
            "Campaign validation failed: {}",
            validation.errors.join(", ")
        ));
    }

    let campaign = Campaign::new(
        req.title.clone(),
        req.description.clone(),
        req.host.clone(),
        req.reward_pool,
        req.deadline,
    );

    match storage.save_campaign(campaign.clone()) {
        Ok(_) => {
            let _ = storage.update_metrics("campaigns_created", 1);
            Logger::campaign_created(&campaign.id, &campaign.host);
            HttpResponse::Created().json(json!({
                "status": "created",
                "campaign": campaign,
                "warnings": validation.warnings,
                "timestamp": Utc::now().to_rfc3339(),
            }))
        }
        Err(e) => {
            ErrorResponseBuilder::internal_server_error(&format!("Failed to save campaign: {e}"))
        }
    }
}

#[get("/campaigns")]
pub async fn list_campaigns(
    query: Query<CampaignListQuery>,
    storage: Data<Arc<Storage>>,
) -> impl Responder {
    let status = match query.status.as_deref() {
        None => None,
        Some("draft") => Some(CampaignStatus::Draft),
        Some("active") => Some(CampaignStatus::Active),
        Some("closed") => Some(CampaignStatus::Closed),
        Some(other) => {
            return ErrorResponseBuilder::bad_request(&format!(
                "Unknown campaign status filter: {other}"
            ))
        }
    };

    let campaigns = storage.get_campaigns(status);
    HttpResponse::Ok().json(json!({
        "campaigns": campaigns,
        "count": campaigns.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/campaigns/{id}")]
pub async fn get_campaign(id: Path<String>, storage: Data<Arc<Storage>>) -> impl Responder {
    match storage.get_campaign(&id) {
        Some(campaign) => HttpResponse::Ok().json(json!({ "campaign": campaign })),
        None => ErrorResponseBuilder::not_found(&format!("Campaign not found: {id}")),
    }
}

#[put("/campaigns/{id}")]
pub async fn update_campaign(
    id: Path<String>,
    req: Json<UpdateCampaignRequest>,
    storage: Data<Arc<Storage>>,
) -> impl Responder {
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return ErrorResponseBuilder::bad_request("Title cannot be empty");
        }
    }

    match storage.update_campaign(
        &id,
        req.title.clone(),
        req.description.clone(),
        req.status,
    ) {
        Ok(campaign) => HttpResponse::Ok().json(json!({
            "status": "updated",
            "campaign": campaign,
            "timestamp": Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            let message = e.to_string();
            if message.contains("not found") {
                ErrorResponseBuilder::not_found(&message)
            } else if message.contains("Invalid status transition") {
                ErrorResponseBuilder::conflict(&message)
            } else {
                ErrorResponseBuilder::internal_server_error(&message)
            }
        }
    }
}

#[delete("/campaigns/{id}")]
pub async fn delete_campaign(id: Path<String>, storage: Data<Arc<Storage>>) -> impl Responder {
    match storage.delete_campaign(&id) {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "deleted",
            "campaign_id": id.as_str(),
            "timestamp": Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            let message = e.to_string();
            if message.contains("not found") {
                ErrorResponseBuilder::not_found(&message)
            } else {
                ErrorResponseBuilder::internal_server_error(&message)
            }
        }
    }
}
