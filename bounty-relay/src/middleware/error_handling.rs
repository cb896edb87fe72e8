use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

/// Uniform JSON error bodies for handler-local failure paths.
pub struct ErrorResponseBuilder;

impl ErrorResponseBuilder {
    pub fn bad_request(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({
            "error": "Bad request",
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
            "request_id": uuid::Uuid::new_v4().to_string(),
        }))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        HttpResponse::NotFound().json(json!({
            "error": "Not found",
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
            "request_id": uuid::Uuid::new_v4().to_string(),
        }))
    }

    pub fn conflict(message: &str) -> HttpResponse {
        HttpResponse::Conflict().json(json!({
            "error": "Conflict",
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
            "request_id": uuid::Uuid::new_v4().to_string(),
        }))
    }

    pub fn internal_server_error(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({
            "error": "Internal server error",
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
            "request_id": uuid::Uuid::new_v4().to_string(),
        }))
    }

    pub fn bad_gateway(message: &str) -> HttpResponse {
        HttpResponse::BadGateway().json(json!({
            "error": "Bad gateway",
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
            "request_id": uuid::Uuid::new_v4().to_string(),
        }))
    }
}
