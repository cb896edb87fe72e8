use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: u32,
    pub burst_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 60,
            max_requests: 100,
            burst_requests: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub api_url: String,
    /// Optional provider key; the key header is only attached when set.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    /// Replace the built-in chain registry with the provider's asset-platform
    /// listing at startup. A failed fetch then aborts startup.
    pub refresh_chains_on_start: bool,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.coingecko.com/api/v3".to_string(),
            api_key: None,
            timeout_secs: 10,
            refresh_chains_on_start: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub log_level: String,
    pub data_dir: String,
    pub debug: bool,
    pub rate_limits: RateLimitConfig,
    pub market: MarketConfig,
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 4000,
            log_level: "info".to_string(),
            data_dir: "data".to_string(),
            debug: false,
            rate_limits: RateLimitConfig::default(),
            market: MarketConfig::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from the environment, falling back to defaults
    /// field by field.
    pub fn new() -> Result<Self> {
        let defaults = Config::default();

        let environment = env::var("RUST_ENV").unwrap_or(defaults.environment);
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let data_dir = env::var("DATA_DIR").unwrap_or(defaults.data_dir);
        let debug = env::var("DEBUG")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.debug);

        let rate_limits = RateLimitConfig {
            window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rate_limits.window_secs),
            max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rate_limits.max_requests),
            burst_requests: env::var("RATE_LIMIT_BURST_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rate_limits.burst_requests),
        };

        let market = MarketConfig {
            api_url: env::var("MARKET_API_URL").unwrap_or(defaults.market.api_url),
            api_key: env::var("MARKET_API_KEY").ok().filter(|k| !k.is_empty()),
            timeout_secs: env::var("MARKET_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.market.timeout_secs),
            refresh_chains_on_start: env::var("MARKET_REFRESH_CHAINS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.market.refresh_chains_on_start),
        };

        Ok(Self {
            environment,
            port,
            log_level,
            data_dir,
            debug,
            rate_limits,
            market,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Collect human-readable validation errors; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("PORT must be non-zero".to_string());
        }
        if self.data_dir.trim().is_empty() {
            errors.push("DATA_DIR cannot be empty".to_string());
        }
        if !["trace", "debug", "info", "warn", "error"].contains(&self.log_level.as_str()) {
            errors.push(format!("LOG_LEVEL '{}' is not a valid level", self.log_level));
        }
        if !self.market.api_url.starts_with("http://") && !self.market.api_url.starts_with("https://")
        {
            errors.push(format!(
                "MARKET_API_URL '{}' must be an http(s) url",
                self.market.api_url
            ));
        }
        if self.rate_limits.window_secs == 0 {
            errors.push("RATE_LIMIT_WINDOW_SECS must be non-zero".to_string());
        }
        if self.rate_limits.burst_requests > self.rate_limits.max_requests {
            errors.push("RATE_LIMIT_BURST_REQUESTS cannot exceed RATE_LIMIT_MAX_REQUESTS".to_string());
        }

        errors
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
