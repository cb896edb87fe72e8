use actix_web::web::{Data, Json, Path};
use actix_web::{get, post, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::logger::Logger;
use crate::infrastructure::storage::file_storage::{CampaignStatus, Storage, Submission};
use crate::middleware::error_handling::ErrorResponseBuilder;
use crate::validators::submission_validator::SubmissionValidator;

#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub creator: String,
    pub content_url: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreSubmissionRequest {
    pub score: u32,
}

#[post("/campaigns/{id}/submissions")]
pub async fn create_submission(
    id: Path<String>,
    req: Json<CreateSubmissionRequest>,
    storage: Data<Arc<Storage>>,
) -> impl Responder {
    let campaign = match storage.get_campaign(&id) {
        Some(campaign) => campaign,
        None => return ErrorResponseBuilder::not_found(&format!("Campaign not found: {id}")),
    };
    if campaign.status != CampaignStatus::Active {
        return ErrorResponseBuilder::conflict(&format!(
            "Campaign {} is {} and does not accept submissions",
            campaign.id, campaign.status
        ));
    }

    let validation =
        SubmissionValidator::validate_create(&req.creator, &req.content_url, req.notes.as_deref());
    if !validation.valid {
        return ErrorResponseBuilder::bad_request(&format!(
            "Submission validation failed: {}",
            validation.errors.join(", ")
        ));
    }

    let submission = Submission::new(
        campaign.id.clone(),
        req.creator.clone(),
        req.content_url.trim().to_string(),
        req.notes.clone(),
    );

    match storage.save_submission(submission.clone()) {
        Ok(_) => {
            let _ = storage.update_metrics("submissions_received", 1);
            Logger::submission_received(&submission.id, &campaign.id);
            HttpResponse::Created().json(json!({
                "status": "created",
                "submission": submission,
                "timestamp": Utc::now().to_rfc3339(),
            }))
        }
        Err(e) => {
            ErrorResponseBuilder::internal_server_error(&format!("Failed to save submission: {e}"))
        }
    }
}

#[get("/campaigns/{id}/submissions")]
pub async fn list_submissions(id: Path<String>, storage: Data<Arc<Storage>>) -> impl Responder {
    if storage.get_campaign(&id).is_none() {
        return ErrorResponseBuilder::not_found(&format!("Campaign not found: {id}"));
    }
    let submissions = storage.get_submissions_for_campaign(&id);
    HttpResponse::Ok().json(json!({
        "campaign_id": id.as_str(),
        "submissions": submissions,
        "count": submissions.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/submissions/{id}")]
pub async fn get_submission(id: Path<String>, storage: Data<Arc<Storage>>) -> impl Responder {
    match storage.get_submission(&id) {
        Some(submission) => HttpResponse::Ok().json(json!({ "submission": submission })),
        None => ErrorResponseBuilder::not_found(&format!("Submission not found: {id}")),
    }
}

#[post("/submissions/{id}/score")]
pub async fn score_submission(
    id: Path<String>,
    req: Json<ScoreSubmissionRequest>,
    storage: Data<Arc<Storage>>,
) -> impl Responder {
    let validation = SubmissionValidator::validate_score(req.score);
    if !validation.valid {
        return ErrorResponseBuilder::bad_request(&validation.errors.join(", "));
    }

    match storage.score_submission(&id, req.score) {
        Ok(submission) => {
            let _ = storage.update_metrics("submissions_scored", 1);
            Logger::submission_scored(&submission.id, req.score);
            HttpResponse::Ok().json(json!({
                "status": "scored",
                "submission": submission,
                "timestamp": Utc::now().to_rfc3339(),
            }))
        }
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
