use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use bounty_chains::ChainRegistry;

use crate::infrastructure::config::MarketConfig;
use crate::infrastructure::logger::Logger;

/// One platform descriptor from the market-data provider's asset-platform
/// listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPlatform {
    pub id: String,
    #[serde(default)]
    pub chain_identifier: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub native_coin_id: Option<String>,
}

/// Outbound client for the market-data provider. One endpoint, no retries:
/// a failed fetch is logged and propagated to the caller unmodified.
pub struct MarketDataClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl MarketDataClient {
    pub fn new(config: &MarketConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// GET the asset-platform listing. The provider key header is attached
    /// only when a key is configured.
    pub async fn fetch_asset_platforms(&self) -> Result<Vec<AssetPlatform>> {
        let url = format!("{}/asset_platforms", self.api_url);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                Logger::market_fetch_failed(&e.to_string());
                return Err(e.into());
            }
        };

        if !response.status().is_success() {
            let error = anyhow!(
                "asset platform request to {} returned status {}",
                url,
                response.status()
            );
            Logger::market_fetch_failed(&error.to_string());
            return Err(error);
        }

        match response.json::<Vec<AssetPlatform>>().await {
            Ok(platforms) => Ok(platforms),
            Err(e) => {
                Logger::market_fetch_failed(&e.to_string());
                Err(e.into())
            }
        }
    }
}

/// Turn a fetched listing into a chain registry: platform names become chain
/// labels, platform ids become the pricing identifiers. Descriptors missing
/// either field are skipped.
pub fn registry_from_platforms(platforms: &[AssetPlatform]) -> Result<ChainRegistry> {
    ChainRegistry::from_pairs(
        platforms
            .iter()
            .filter(|p| !p.name.trim().is_empty() && !p.id.trim().is_empty())
            .map(|p| (p.name.as_str(), p.id.clone())),
    )
    .map_err(|e| anyhow!("invalid asset platform listing: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: &str, name: &str) -> AssetPlatform {
        AssetPlatform {
            id: id.to_string(),
            chain_identifier: None,
            name: name.to_string(),
            native_coin_id: None,
        }
    }

    #[test]
    fn test_registry_from_platforms_normalizes_names() {
        let platforms = vec![
            platform("ethereum", "Ethereum"),
            platform("polygon-pos", "Polygon"),
        ];
        let registry = registry_from_platforms(&platforms).expect("conversion failed");
        assert_eq!(registry.platform_id("ethereum"), Some("ethereum"));
        assert_eq!(registry.platform_id("polygon"), Some("polygon-pos"));
    }

    #[test]
    fn test_registry_from_platforms_skips_incomplete_descriptors() {
        let platforms = vec![
            platform("ethereum", "Ethereum"),
            platform("", "Nameless Chain"),
            platform("mystery", "  "),
        ];
        let registry = registry_from_platforms(&platforms).expect("conversion failed");
        assert_eq!(registry.len(), 1);
    }
}
