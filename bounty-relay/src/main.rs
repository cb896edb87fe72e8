use actix_web::{web, App, HttpServer};

use std::sync::Arc;

use bounty_chains::ChainRegistry;
use bounty_relay::api::{
    campaign_leaderboard, connect_wallet, create_campaign, create_submission, delete_campaign,
    detailed_health, disconnect_wallet, get_asset_platforms, get_campaign, get_chain_info,
    get_submission, get_supported_chains, get_user_wallets, health, list_campaigns,
    list_submissions, platform_leaderboard, score_submission, update_campaign,
    wallet_token_report,
};
use bounty_relay::app::leaderboard_service::LeaderboardService;
use bounty_relay::infrastructure::config::Config;
use bounty_relay::infrastructure::logger::Logger;
use bounty_relay::infrastructure::market::{self, MarketDataClient};
use bounty_relay::infrastructure::storage::file_storage::Storage;
use bounty_relay::middleware::RateLimitingMiddleware;
use bounty_relay::utils::banner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    banner::display_banner();

    // Load configuration before the logger so the level is honored
    let config = match Config::new() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Configuration loading failed: {e}"),
            ));
        }
    };

    Logger::init(&config.log_level);

    log::info!("🚀 Starting Bounty Relay Server...");

    log::info!("🔍 Validating configuration...");
    let validation_errors = config.validate();
    if !validation_errors.is_empty() {
        log::error!(
            "❌ Configuration validation failed: {}",
            validation_errors.join(", ")
        );
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "Configuration validation failed: {}",
                validation_errors.join(", ")
            ),
        ));
    }
    log::info!("✅ Configuration validation passed");

    // Initialize storage with error handling
    let storage = match Storage::new(&config.data_dir) {
        Ok(storage) => {
            log::info!("✅ Storage initialized successfully");
            Arc::new(storage)
        }
        Err(e) => {
            log::error!("❌ Failed to initialize storage: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Storage initialization failed: {e}"),
            ));
        }
    };

    // Outbound market-data client
    let market_client = match MarketDataClient::new(&config.market) {
        Ok(client) => {
            log::info!("✅ Market data client initialized successfully");
            Arc::new(client)
        }
        Err(e) => {
            log::error!("❌ Failed to initialize market data client: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Market data client initialization failed: {e}"),
            ));
        }
    };

    // Supported chains the token processing paths consult
    let registry = if config.market.refresh_chains_on_start {
        log::info!("🔍 Refreshing chain registry from asset platform listing...");
        match market_client.fetch_asset_platforms().await {
            Ok(platforms) => match market::registry_from_platforms(&platforms) {
                Ok(registry) => {
                    log::info!("✅ Chain registry built from {} platform(s)", registry.len());
                    Arc::new(registry)
                }
                Err(e) => {
                    log::error!("❌ Asset platform listing was unusable: {}", e);
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!("Chain registry refresh failed: {e}"),
                    ));
                }
            },
            Err(e) => {
                log::error!("❌ Failed to fetch asset platforms: {}", e);
                return Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Chain registry refresh failed: {e}"),
                ));
            }
        }
    } else {
        Arc::new(ChainRegistry::with_defaults())
    };
    log::info!("✅ Chain registry initialized successfully");

    let leaderboard_service = Arc::new(LeaderboardService::new(Arc::clone(&storage)));
    log::info!("✅ Leaderboard service initialized successfully");

    let port = config.port;
    let rate_limits = config.rate_limits.clone();

    log::info!("🌐 Starting Bounty Relay Server on port {}", port);
    log::info!("📊 Environment: {}", config.environment);
    log::info!("🔗 Supported chains: {}", registry.len());

    HttpServer::new(move || {
        App::new()
            // Global built-in middleware only
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .wrap(actix_cors::Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&storage)))
            .app_data(web::Data::new(Arc::clone(&registry)))
            .app_data(web::Data::new(Arc::clone(&market_client)))
            .app_data(web::Data::new(Arc::clone(&leaderboard_service)))
            .app_data(web::Data::new(Arc::clone(&config)))
            // Health endpoints (no custom middleware)
            .service(health)
            .service(detailed_health)
            // API endpoints with rate limiting
            .service(
                web::scope("/api")
                    .wrap(RateLimitingMiddleware::new(
                        rate_limits.max_requests,
                        rate_limits.burst_requests,
                        std::time::Duration::from_secs(rate_limits.window_secs),
                    ))
                    .service(create_campaign)
                    .service(list_campaigns)
                    .service(get_campaign)
                    .service(update_campaign)
                    .service(delete_campaign)
                    .service(create_submission)
                    .service(list_submissions)
                    .service(get_submission)
                    .service(score_submission)
                    .service(campaign_leaderboard)
                    .service(platform_leaderboard)
                    .service(connect_wallet)
                    .service(wallet_token_report)
                    .service(get_user_wallets)
                    .service(disconnect_wallet)
                    .service(get_supported_chains)
                    .service(get_chain_info)
                    .service(get_asset_platforms),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
