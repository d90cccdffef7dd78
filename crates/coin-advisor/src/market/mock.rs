//! Mock Market Data Source
//!
//! For testing and offline demo runs. Returns realistic static snapshots,
//! and can be switched into an unavailable mode to exercise the
//! stale-data path.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MarketDataSource, MarketSnapshot};
use crate::error::{AdvisorError, Result};

/// Mock market source with static per-coin snapshots
pub struct MockMarketSource {
    available: bool,
}

impl Default for MockMarketSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketSource {
    pub fn new() -> Self {
        Self { available: true }
    }

    /// A source whose every call fails, for exercising refresh failure
    /// handling.
    pub fn unavailable() -> Self {
        Self { available: false }
    }

    fn base_snapshot(coin_id: &str) -> Option<(Decimal, Decimal)> {
        // (24h change percent, market cap USD)
        match coin_id {
            "bitcoin" => Some((dec!(2.5), dec!(1_900_000_000_000))),
            "ethereum" => Some((dec!(0.0), dec!(420_000_000_000))),
            "cardano" => Some((dec!(1.8), dec!(9_500_000_000))),
            "solana" => Some((dec!(4.2), dec!(8_000_000_000))),
            "dogecoin" => Some((dec!(-1.2), dec!(9_000_000_000))),
            _ => None,
        }
    }
}

#[async_trait]
impl MarketDataSource for MockMarketSource {
    async fn snapshot(&self, coin_id: &str) -> Result<MarketSnapshot> {
        if !self.available {
            return Err(AdvisorError::MarketData("mock source offline".into()));
        }

        let (change_24h_percent, market_cap_usd) = Self::base_snapshot(coin_id)
            .ok_or_else(|| AdvisorError::UnsupportedCoin(coin_id.to_string()))?;

        Ok(MarketSnapshot {
            change_24h_percent,
            market_cap_usd,
        })
    }

    async fn health_check(&self) -> bool {
        self.available
    }

    fn name(&self) -> &str {
        "MockMarket"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_coin_snapshot() {
        let source = MockMarketSource::new();
        let snapshot = source.snapshot("bitcoin").await.unwrap();

        assert_eq!(snapshot.change_24h_percent, dec!(2.5));
        assert!(snapshot.market_cap_usd > dec!(10_000_000_000));
    }

    #[tokio::test]
    async fn test_unknown_coin_errors() {
        let source = MockMarketSource::new();
        let result = source.snapshot("fakecoin").await;

        assert!(matches!(result, Err(AdvisorError::UnsupportedCoin(_))));
    }

    #[tokio::test]
    async fn test_unavailable_source() {
        let source = MockMarketSource::unavailable();
        assert!(!source.health_check().await);
        assert!(source.snapshot("bitcoin").await.is_err());
    }
}
