//! Market Data Integration
//!
//! Abstractions and implementations for live market-data sources. A
//! refresh maps raw market numbers onto the table's categorical buckets;
//! any failure leaves the previous values in place (stale-but-available).

mod coingecko;
mod mock;

pub use coingecko::{CoinGeckoConfig, CoinGeckoSource};
pub use mock::MockMarketSource;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::model::{MarketCap, MarketUpdate, PriceTrend};
use crate::table::CoinTable;

/// Upper bound on a single refresh call, on top of any transport-level
/// timeout the source applies itself.
const REFRESH_TIMEOUT: Duration = Duration::from_secs(15);

/// Raw market numbers for one coin, before bucket mapping.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// 24-hour price change, percent.
    pub change_24h_percent: Decimal,

    /// Market capitalization in USD.
    pub market_cap_usd: Decimal,
}

/// Market data source trait (Strategy pattern)
///
/// Implement this per provider: CoinGecko, an exchange API, a fixture.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch current market numbers for one coin id (lowercase name).
    async fn snapshot(&self, coin_id: &str) -> Result<MarketSnapshot>;

    /// Check if the source is reachable.
    async fn health_check(&self) -> bool;

    /// Source name, for logs.
    fn name(&self) -> &str;
}

/// Map a 24h change percentage onto a trend bucket.
pub fn trend_from_change(change_percent: Decimal) -> PriceTrend {
    if change_percent > dec!(5) {
        PriceTrend::RisingRapidly
    } else if change_percent > Decimal::ZERO {
        PriceTrend::Rising
    } else if change_percent < dec!(-5) {
        PriceTrend::FallingRapidly
    } else if change_percent < Decimal::ZERO {
        PriceTrend::Falling
    } else {
        PriceTrend::Stable
    }
}

/// Map a USD market cap onto a bucket: above $10B high, above $1B medium.
pub fn cap_from_usd(market_cap_usd: Decimal) -> MarketCap {
    if market_cap_usd > dec!(10_000_000_000) {
        MarketCap::High
    } else if market_cap_usd > dec!(1_000_000_000) {
        MarketCap::Medium
    } else {
        MarketCap::Low
    }
}

/// Refresh one coin's dynamic attributes from a market source.
///
/// Returns true when the table was updated. On fetch failure or timeout
/// the record keeps its last known values and the failure is logged, never
/// propagated.
pub async fn refresh_coin(
    table: &mut CoinTable,
    source: &dyn MarketDataSource,
    name: &str,
) -> bool {
    let coin_id = name.to_lowercase();

    let snapshot = match tokio::time::timeout(REFRESH_TIMEOUT, source.snapshot(&coin_id)).await {
        Ok(Ok(snapshot)) => snapshot,
        Ok(Err(e)) => {
            tracing::warn!(coin = name, source = source.name(), error = %e,
                "market refresh failed, keeping last known values");
            return false;
        }
        Err(_) => {
            tracing::warn!(coin = name, source = source.name(),
                "market refresh timed out, keeping last known values");
            return false;
        }
    };

    let update = MarketUpdate {
        price_trend: trend_from_change(snapshot.change_24h_percent),
        market_cap: cap_from_usd(snapshot.market_cap_usd),
        last_updated: Utc::now(),
    };

    match table.update(name, update) {
        Ok(()) => {
            tracing::info!(coin = name, trend = update.price_trend.label(),
                cap = update.market_cap.label(), "market data refreshed");
            true
        }
        Err(AdvisorError::CoinNotFound(_)) => {
            tracing::warn!(coin = name, "refresh target missing from table");
            false
        }
        Err(e) => {
            tracing::warn!(coin = name, error = %e, "market refresh failed");
            false
        }
    }
}
