//! CoinGecko Market Data Source
//!
//! Fetches 24h change and market cap from the public CoinGecko API. Coin
//! ids are lowercase full names ("bitcoin", "cardano"), which matches how
//! the table names its records.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{MarketDataSource, MarketSnapshot};
use crate::error::{AdvisorError, Result};

/// CoinGecko client configuration
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    /// API base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".into(),
            timeout_secs: 10,
        }
    }
}

impl CoinGeckoConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url =
            std::env::var("COINGECKO_API_URL").unwrap_or(defaults.base_url);
        let timeout_secs = std::env::var("COINGECKO_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

/// CoinGecko-backed market data source
pub struct CoinGeckoSource {
    client: reqwest::Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoSource {
    /// Create from configuration.
    pub fn from_config(config: CoinGeckoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(CoinGeckoConfig::from_env())
    }

    fn coin_url(&self, coin_id: &str) -> String {
        format!(
            "{}/coins/{}?localization=false&tickers=false&community_data=false&developer_data=false",
            self.config.base_url, coin_id
        )
    }
}

/// Response envelope, reduced to the fields the refresh consumes.
#[derive(Debug, Deserialize)]
struct CoinEnvelope {
    market_data: Option<MarketData>,
}

#[derive(Debug, Deserialize)]
struct MarketData {
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,

    #[serde(default)]
    market_cap: CapByCurrency,
}

#[derive(Debug, Default, Deserialize)]
struct CapByCurrency {
    #[serde(default)]
    usd: Option<f64>,
}

impl CoinEnvelope {
    fn into_snapshot(self, coin_id: &str) -> Result<MarketSnapshot> {
        let market_data = self
            .market_data
            .ok_or_else(|| AdvisorError::MarketData(format!("no market data for {coin_id}")))?;

        // A listed coin can report no 24h change shortly after listing;
        // treat that as flat rather than failing the refresh.
        let change = market_data.price_change_percentage_24h.unwrap_or(0.0);
        let cap = market_data.market_cap.usd.unwrap_or(0.0);

        Ok(MarketSnapshot {
            change_24h_percent: Decimal::from_f64_retain(change).unwrap_or(Decimal::ZERO),
            market_cap_usd: Decimal::from_f64_retain(cap).unwrap_or(Decimal::ZERO),
        })
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoSource {
    async fn snapshot(&self, coin_id: &str) -> Result<MarketSnapshot> {
        let response = self
            .client
            .get(self.coin_url(coin_id))
            .send()
            .await?
            .error_for_status()?;

        let envelope: CoinEnvelope = response.json().await?;
        envelope.into_snapshot(coin_id)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/ping", self.config.base_url);
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "CoinGecko health check failed");
                false
            }
        }
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_defaults() {
        let config = CoinGeckoConfig::default();
        assert_eq!(config.base_url, "https://api.coingecko.com/api/v3");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_envelope_parsing() {
        let json = r#"{
            "id": "bitcoin",
            "market_data": {
                "price_change_percentage_24h": 2.5,
                "market_cap": { "usd": 1900000000000.0, "eur": 1750000000000.0 }
            }
        }"#;

        let envelope: CoinEnvelope = serde_json::from_str(json).unwrap();
        let snapshot = envelope.into_snapshot("bitcoin").unwrap();

        assert_eq!(snapshot.change_24h_percent, dec!(2.5));
        assert_eq!(snapshot.market_cap_usd, dec!(1900000000000));
    }

    #[test]
    fn test_envelope_missing_change_defaults_flat() {
        let json = r#"{
            "market_data": { "market_cap": { "usd": 50000000.0 } }
        }"#;

        let envelope: CoinEnvelope = serde_json::from_str(json).unwrap();
        let snapshot = envelope.into_snapshot("newcoin").unwrap();

        assert_eq!(snapshot.change_24h_percent, Decimal::ZERO);
    }

    #[test]
    fn test_envelope_without_market_data_errors() {
        let envelope: CoinEnvelope = serde_json::from_str("{}").unwrap();
        let result = envelope.into_snapshot("ghostcoin");

        assert!(matches!(result, Err(AdvisorError::MarketData(_))));
    }
}
