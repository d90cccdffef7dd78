//! Domain Models
//!
//! Core data types for the coin attribute table. Every attribute is a
//! typed enum or bounded integer so that a missing or misspelled field is
//! a build error, not a lookup surprise at query time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a coin's recent price movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTrend {
    RisingRapidly,
    Rising,
    Stable,
    Falling,
    FallingRapidly,
    Volatile,
}

impl PriceTrend {
    /// True for both rising variants. Profitability and growth filters
    /// treat them identically.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rising | Self::RisingRapidly)
    }

    pub fn is_falling(self) -> bool {
        matches!(self, Self::Falling | Self::FallingRapidly)
    }

    /// Human-readable label for rendered responses.
    pub fn label(self) -> &'static str {
        match self {
            Self::RisingRapidly => "Rising Rapidly",
            Self::Rising => "Rising",
            Self::Stable => "Stable",
            Self::Falling => "Falling",
            Self::FallingRapidly => "Falling Rapidly",
            Self::Volatile => "Volatile",
        }
    }
}

/// Market capitalization bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    Low,
    Medium,
    High,
}

impl MarketCap {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Energy consumption bucket of the coin's consensus mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    Low,
    Medium,
    High,
}

impl EnergyUse {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Highest valid sustainability score. Scores are stored on a 0..=10
/// integer scale; fractional source scales convert at the boundary.
pub const MAX_SUSTAINABILITY_SCORE: u8 = 10;

/// A single coin's attribute record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Full name, unique within the table (e.g., "Bitcoin").
    pub name: String,

    /// Ticker symbol (e.g., "BTC"). Matched case-insensitively in lookups.
    pub symbol: String,

    /// Recent price direction.
    pub price_trend: PriceTrend,

    /// Market capitalization bucket.
    pub market_cap: MarketCap,

    /// Energy use bucket.
    pub energy_use: EnergyUse,

    /// Environmental efficiency rating, 0..=10. Externally assigned, not
    /// computed from live data.
    pub sustainability_score: u8,

    /// One-line description shown in lookup responses.
    pub description: Option<String>,

    /// Set by the last successful market refresh.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CoinRecord {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_trend: PriceTrend,
        market_cap: MarketCap,
        energy_use: EnergyUse,
        sustainability_score: u8,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into().to_uppercase(),
            price_trend,
            market_cap,
            energy_use,
            sustainability_score: sustainability_score.min(MAX_SUSTAINABILITY_SCORE),
            description: None,
            last_updated: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case-insensitive match against name or symbol.
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.symbol.eq_ignore_ascii_case(query)
    }

    /// Score rendered for display, e.g. "8/10".
    pub fn score_display(&self) -> String {
        format!("{}/{}", self.sustainability_score, MAX_SUSTAINABILITY_SCORE)
    }
}

/// Partial field set applied by a market refresh. Static attributes
/// (energy use, sustainability score, description) are never touched.
#[derive(Clone, Copy, Debug)]
pub struct MarketUpdate {
    pub price_trend: PriceTrend,
    pub market_cap: MarketCap,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_variants() {
        assert!(PriceTrend::Rising.is_rising());
        assert!(PriceTrend::RisingRapidly.is_rising());
        assert!(!PriceTrend::Stable.is_rising());
        assert!(!PriceTrend::Volatile.is_rising());
        assert!(PriceTrend::FallingRapidly.is_falling());
    }

    #[test]
    fn test_record_normalizes_symbol() {
        let record = CoinRecord::new(
            "Bitcoin",
            "btc",
            PriceTrend::Rising,
            MarketCap::High,
            EnergyUse::High,
            3,
        );
        assert_eq!(record.symbol, "BTC");
        assert!(record.matches("bitcoin"));
        assert!(record.matches("BTC"));
        assert!(!record.matches("eth"));
    }

    #[test]
    fn test_score_clamped_to_scale() {
        let record = CoinRecord::new(
            "Testcoin",
            "TST",
            PriceTrend::Stable,
            MarketCap::Low,
            EnergyUse::Low,
            42,
        );
        assert_eq!(record.sustainability_score, MAX_SUSTAINABILITY_SCORE);
        assert_eq!(record.score_display(), "10/10");
    }
}
