use std::fs;
use std::sync::{Once, OnceLock};
use tracing::{debug, error, info, warn, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling, rolling::Rotation};
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

static INIT: Once = Once::new();

// Keeps the non-blocking file writer alive for the process lifetime.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub service_name: String,
    pub enable_console: bool,
    pub enable_file: bool,
    pub log_directory: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            service_name: "bounty-relay".to_string(),
            enable_console: true,
            enable_file: true,
            log_directory: "logs".to_string(),
        }
    }
}

pub struct Logger;

impl Logger {
    /// Initialize the global tracing subscriber once. Later calls are no-ops.
    pub fn init(log_level: &str) {
        let config = LogConfig {
            level: log_level.to_string(),
            ..LogConfig::default()
        };
        Self::init_with_config(config);
    }

    pub fn init_with_config(config: LogConfig) {
        INIT.call_once(|| {
            let level = match config.level.to_lowercase().as_str() {
                "trace" => Level::TRACE,
                "debug" => Level::DEBUG,
                "info" => Level::INFO,
                "warn" => Level::WARN,
                "error" => Level::ERROR,
                _ => Level::INFO,
            };

            let env_filter = EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bounty_relay={level}")),
            );

            let mut layers: Vec<Box<dyn Layer<_> + Send + Sync>> = Vec::new();

            if config.enable_console {
                let console_layer = fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout);
                layers.push(Box::new(console_layer));
            }

            if config.enable_file {
                if let Err(e) = fs::create_dir_all(&config.log_directory) {
                    eprintln!("Failed to create log directory: {e}");
                } else {
                    let file_appender = rolling::RollingFileAppender::new(
                        Rotation::DAILY,
                        &config.log_directory,
                        "bounty_relay.log",
                    );
                    let (non_blocking_appender, guard) = non_blocking(file_appender);
                    let _ = FILE_GUARD.set(guard);
                    let file_layer = fmt::layer()
                        .with_timer(UtcTime::rfc_3339())
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(non_blocking_appender);
                    layers.push(Box::new(file_layer));
                }
            }

            Registry::default().with(env_filter).with(layers).init();
        });
    }

    pub fn info(message: &str) {
        info!("{}", message);
    }

    pub fn warn(message: &str) {
        warn!("{}", message);
    }

    pub fn error(message: &str) {
        error!("{}", message);
    }

    pub fn debug(message: &str) {
        debug!("{}", message);
    }

    pub fn campaign_created(campaign_id: &str, host: &str) {
        info!("Campaign created: {} by host {}", campaign_id, host);
    }

    pub fn submission_received(submission_id: &str, campaign_id: &str) {
        info!("Submission received: {} for campaign {}", submission_id, campaign_id);
    }

    pub fn submission_scored(submission_id: &str, score: u32) {
        info!("Submission scored: {} -> {}", submission_id, score);
    }

    pub fn wallet_connected(user: &str, chain: &str) {
        info!("Wallet connected for {} on {}", user, chain);
    }

    pub fn report_generated(total_tokens: usize, unsupported_chains: usize) {
        info!(
            "Token report generated: {} token(s), {} unsupported chain(s)",
            total_tokens, unsupported_chains
        );
    }

    pub fn market_fetch_failed(error: &str) {
        error!("Asset platform fetch failed: {}", error);
    }

    pub fn rate_limit_hit(ip: &str) {
        warn!("Rate limit hit for IP: {}", ip);
    }
}
