use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for the bounty relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RelayError {
    // Request payload problems
    Validation(String),

    // Store failures
    Storage(String),

    // Missing resources
    NotFound(String),

    // Market-data provider failures
    Market(String),

    // Configuration errors
    Config(String),

    // Generic errors
    Generic(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Validation(msg) => write!(f, "Validation error: {msg}"),
            RelayError::Storage(msg) => write!(f, "Storage error: {msg}"),
            RelayError::NotFound(msg) => write!(f, "Not found: {msg}"),
            RelayError::Market(msg) => write!(f, "Market data error: {msg}"),
            RelayError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RelayError::Generic(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for RelayError {}

impl RelayError {
    pub fn to_http_response(&self) -> (actix_web::http::StatusCode, serde_json::Value) {
        use actix_web::http::StatusCode;

        let (status_code, error_type) = match self {
            RelayError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            RelayError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            RelayError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            RelayError::Market(_) => (StatusCode::BAD_GATEWAY, "MARKET_DATA_ERROR"),
            RelayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            RelayError::Generic(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = serde_json::json!({
            "error": error_type,
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        (status_code, body)
    }
}

impl ResponseError for RelayError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, body) = self.to_http_response();
        HttpResponse::build(status_code).json(body)
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(err: anyhow::Error) -> Self {
        RelayError::Generic(err.to_string())
    }
}

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        RelayError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Validation(err.to_string())
    }
}
