//! Error Types for Coin Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("coin not found: {0}")]
    CoinNotFound(String),

    #[error("coin not supported by market source: {0}")]
    UnsupportedCoin(String),

    #[error("market data error: {0}")]
    MarketData(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AdvisorError {
    /// Whether a later retry of the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::MarketData(_))
    }
}
