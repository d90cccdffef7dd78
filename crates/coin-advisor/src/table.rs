//! Coin Attribute Table
//!
//! Insertion-ordered, in-memory store of coin records. Iteration order is
//! the seed order, which is what breaks ranking ties (a max-scan keeps the
//! first maximal element).

use crate::error::{AdvisorError, Result};
use crate::model::{CoinRecord, EnergyUse, MarketCap, MarketUpdate, PriceTrend};

/// The in-memory attribute table. Owned by the responder; a single
/// instance per process, mutated only by market refreshes.
#[derive(Clone, Debug, Default)]
pub struct CoinTable {
    coins: Vec<CoinRecord>,
}

impl CoinTable {
    pub fn new() -> Self {
        Self { coins: Vec::new() }
    }

    /// The fixed seed table used at startup.
    pub fn seed() -> Self {
        let mut table = Self::new();
        table.insert(
            CoinRecord::new(
                "Bitcoin",
                "BTC",
                PriceTrend::Rising,
                MarketCap::High,
                EnergyUse::High,
                3,
            )
            .with_description("The original cryptocurrency, but energy-intensive"),
        );
        table.insert(
            CoinRecord::new(
                "Ethereum",
                "ETH",
                PriceTrend::Stable,
                MarketCap::High,
                EnergyUse::Medium,
                6,
            )
            .with_description("Smart contract platform with improving efficiency"),
        );
        table.insert(
            CoinRecord::new(
                "Cardano",
                "ADA",
                PriceTrend::Rising,
                MarketCap::Medium,
                EnergyUse::Low,
                8,
            )
            .with_description("Research-driven, eco-friendly blockchain"),
        );
        table.insert(
            CoinRecord::new(
                "Solana",
                "SOL",
                PriceTrend::Rising,
                MarketCap::Medium,
                EnergyUse::Low,
                7,
            )
            .with_description("Fast and energy-efficient blockchain"),
        );
        table.insert(
            CoinRecord::new(
                "Dogecoin",
                "DOGE",
                PriceTrend::Volatile,
                MarketCap::Medium,
                EnergyUse::Medium,
                4,
            )
            .with_description("Meme coin with community support"),
        );
        table
    }

    /// Insert a record, replacing any existing record with the same name.
    /// Names stay unique; order of first insertion is preserved.
    pub fn insert(&mut self, record: CoinRecord) {
        if let Some(existing) = self
            .coins
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&record.name))
        {
            *existing = record;
        } else {
            self.coins.push(record);
        }
    }

    /// Case-insensitive lookup by name or symbol.
    pub fn get(&self, query: &str) -> Option<&CoinRecord> {
        self.coins.iter().find(|c| c.matches(query))
    }

    /// Apply a market refresh to an existing record. Absent names are an
    /// error, not a silent no-op.
    pub fn update(&mut self, name: &str, update: MarketUpdate) -> Result<()> {
        let record = self
            .coins
            .iter_mut()
            .find(|c| c.matches(name))
            .ok_or_else(|| AdvisorError::CoinNotFound(name.to_string()))?;

        record.price_trend = update.price_trend;
        record.market_cap = update.market_cap;
        record.last_updated = Some(update.last_updated);
        Ok(())
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CoinRecord> {
        self.coins.iter()
    }

    /// Coin names in insertion order, for "supported coins" messages.
    pub fn names(&self) -> Vec<&str> {
        self.coins.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_seed_table_order() {
        let table = CoinTable::seed();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.names(),
            vec!["Bitcoin", "Ethereum", "Cardano", "Solana", "Dogecoin"]
        );
    }

    #[test]
    fn test_get_by_name_or_symbol() {
        let table = CoinTable::seed();
        assert!(table.get("bitcoin").is_some());
        assert!(table.get("BTC").is_some());
        assert!(table.get("btc").is_some());
        assert!(table.get("Fakecoin").is_none());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut table = CoinTable::seed();
        table.insert(CoinRecord::new(
            "Bitcoin",
            "BTC",
            PriceTrend::Falling,
            MarketCap::High,
            EnergyUse::High,
            3,
        ));

        assert_eq!(table.len(), 5);
        let btc = table.get("BTC").unwrap();
        assert_eq!(btc.price_trend, PriceTrend::Falling);
        // Replacement keeps the original position.
        assert_eq!(table.names()[0], "Bitcoin");
    }

    #[test]
    fn test_update_mutates_in_place() {
        let mut table = CoinTable::seed();
        let now = Utc::now();

        table
            .update(
                "Ethereum",
                MarketUpdate {
                    price_trend: PriceTrend::RisingRapidly,
                    market_cap: MarketCap::High,
                    last_updated: now,
                },
            )
            .unwrap();

        let eth = table.get("ETH").unwrap();
        assert_eq!(eth.price_trend, PriceTrend::RisingRapidly);
        assert_eq!(eth.last_updated, Some(now));
        // Static attributes untouched.
        assert_eq!(eth.sustainability_score, 6);
    }

    #[test]
    fn test_update_unknown_coin_errors() {
        let mut table = CoinTable::seed();
        let result = table.update(
            "Fakecoin",
            MarketUpdate {
                price_trend: PriceTrend::Stable,
                market_cap: MarketCap::Low,
                last_updated: Utc::now(),
            },
        );

        assert!(matches!(result, Err(AdvisorError::CoinNotFound(_))));
    }
}
