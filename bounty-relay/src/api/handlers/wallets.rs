use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use bounty_chains::{build_report, describe, validate_addresses, ChainRegistry, Token};

use crate::infrastructure::logger::Logger;
use crate::infrastructure::storage::file_storage::{Storage, WalletLink};
use crate::middleware::error_handling::ErrorResponseBuilder;

#[derive(Debug, Deserialize)]
pub struct ConnectWalletRequest {
    pub user: String,
    pub address: String,
    pub chain: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenReportRequest {
    pub tokens: Vec<Token>,
}

#[post("/wallets")]
pub async fn connect_wallet(
    req: Json<ConnectWalletRequest>,
    storage: Data<Arc<Storage>>,
    registry: Data<Arc<ChainRegistry>>,
) -> impl Responder {
    if req.user.trim().is_empty() {
        return ErrorResponseBuilder::bad_request("User cannot be empty");
    }

    let info = describe(registry.get_ref(), Some(&req.chain));
    if !info.is_supported {
        let mut message = format!("Chain '{}' is not supported", req.chain);
        if let Some(suggestions) = &info.suggestions {
            if !suggestions.is_empty() {
                message.push_str(&format!(", did you mean: {}", suggestions.join(", ")));
            }
        }
        return ErrorResponseBuilder::bad_request(&message);
    }

    let validation = validate_addresses(&[req.address.as_str()], &info.normalized);
    let Some(address) = validation.valid.first() else {
        return ErrorResponseBuilder::bad_request(&format!(
            "Address '{}' is not valid for chain {}",
            req.address, info.normalized
        ));
    };

    let wallet = WalletLink::new(req.user.clone(), address.clone(), info.normalized.clone());

    match storage.save_wallet_link(wallet.clone()) {
        Ok(_) => {
            let _ = storage.update_metrics("wallets_connected", 1);
            Logger::wallet_connected(&wallet.user, &wallet.chain);
            HttpResponse::Created().json(json!({
                "status": "connected",
                "wallet": wallet,
                "warnings": validation.warnings,
                "timestamp": Utc::now().to_rfc3339(),
            }))
        }
        Err(e) => {
            let message = e.to_string();
            if message.contains("already connected") {
                ErrorResponseBuilder::conflict(&message)
            } else {
                ErrorResponseBuilder::internal_server_error(&message)
            }
        }
    }
}

#[get("/wallets/{user}")]
pub async fn get_user_wallets(user: Path<String>, storage: Data<Arc<Storage>>) -> impl Responder {
    let wallets = storage.get_wallets_for_user(&user);
    HttpResponse::Ok().json(json!({
        "user": user.as_str(),
        "wallets": wallets,
        "count": wallets.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[delete("/wallets/{id}")]
pub async fn disconnect_wallet(id: Path<String>, storage: Data<Arc<Storage>>) -> impl Responder {
    match storage.delete_wallet_link(&id) {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "disconnected",
            "wallet_id": id.as_str(),
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

/// Partition a wallet's token batch by chain support, validate addresses and
/// return the full report with recommendations.
#[post("/wallets/report")]
pub async fn wallet_token_report(
    req: Json<TokenReportRequest>,
    storage: Data<Arc<Storage>>,
    registry: Data<Arc<ChainRegistry>>,
) -> impl Responder {
    let report = build_report(registry.get_ref(), &req.tokens);

    let _ = storage.update_metrics("reports_generated", 1);
    Logger::report_generated(
        report.partition.summary.total_tokens,
        report.partition.summary.chains_unsupported,
    );

    HttpResponse::Ok().json(report)
}
