//! Ranking and Filter Routines
//!
//! The scoring formulas behind each recommendation intent. All scans run
//! in table iteration order and keep the first maximal element, so results
//! are reproducible for identical inputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{CoinRecord, EnergyUse, MarketCap};
use crate::table::CoinTable;

/// Sustainability scores above this threshold qualify for the long-term
/// growth filter.
const LONG_TERM_SCORE_FLOOR: u8 = 7;

/// Record with the maximum sustainability score, ties to first-seen.
pub fn most_sustainable(table: &CoinTable) -> Option<&CoinRecord> {
    table.iter().fold(None, |best, coin| match best {
        Some(b) if coin.sustainability_score <= b.sustainability_score => best,
        _ => Some(coin),
    })
}

/// Strict profitability rule: rising trend AND high market cap.
///
/// The looser "high or medium cap" variant admits nearly every rising
/// coin in a small table, so the strict rule is the one implemented.
pub fn profitable(table: &CoinTable) -> Vec<&CoinRecord> {
    table
        .iter()
        .filter(|c| c.price_trend.is_rising() && c.market_cap == MarketCap::High)
        .collect()
}

/// Coins with a rising price trend, in table order.
pub fn rising(table: &CoinTable) -> Vec<&CoinRecord> {
    table.iter().filter(|c| c.price_trend.is_rising()).collect()
}

/// Coins with a falling price trend, in table order.
pub fn falling(table: &CoinTable) -> Vec<&CoinRecord> {
    table.iter().filter(|c| c.price_trend.is_falling()).collect()
}

/// Long-term growth filter: rising, top-tier sustainability, low energy.
pub fn long_term(table: &CoinTable) -> Vec<&CoinRecord> {
    table
        .iter()
        .filter(|c| {
            c.price_trend.is_rising()
                && c.sustainability_score > LONG_TERM_SCORE_FLOOR
                && c.energy_use == EnergyUse::Low
        })
        .collect()
}

/// Composite score blending trend, market cap, and sustainability:
/// `(trend_score + cap_score + sustainability) / 3` with trend_score 3 for
/// rising coins (1 otherwise) and cap_score 2 for high caps (1 otherwise).
///
/// Computed in `Decimal` so the comparison is exact and the argmax is the
/// same on every run and platform.
pub fn composite_score(coin: &CoinRecord) -> Decimal {
    let trend_score = if coin.price_trend.is_rising() {
        dec!(3)
    } else {
        dec!(1)
    };
    let cap_score = if coin.market_cap == MarketCap::High {
        dec!(2)
    } else {
        dec!(1)
    };
    let sustainability = Decimal::from(coin.sustainability_score);

    (trend_score + cap_score + sustainability) / dec!(3)
}

/// Argmax of the composite score, ties to first-seen.
pub fn balanced_pick(table: &CoinTable) -> Option<&CoinRecord> {
    table
        .iter()
        .fold(None, |best: Option<(&CoinRecord, Decimal)>, coin| {
            let score = composite_score(coin);
            match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((coin, score)),
            }
        })
        .map(|(coin, _)| coin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoinRecord, EnergyUse, MarketCap, PriceTrend};

    fn three_coin_table() -> CoinTable {
        let mut table = CoinTable::new();
        table.insert(CoinRecord::new(
            "Bitcoin",
            "BTC",
            PriceTrend::Rising,
            MarketCap::High,
            EnergyUse::High,
            3,
        ));
        table.insert(CoinRecord::new(
            "Ethereum",
            "ETH",
            PriceTrend::Stable,
            MarketCap::High,
            EnergyUse::Medium,
            6,
        ));
        table.insert(CoinRecord::new(
            "Cardano",
            "ADA",
            PriceTrend::Rising,
            MarketCap::Medium,
            EnergyUse::Low,
            8,
        ));
        table
    }

    #[test]
    fn test_most_sustainable() {
        let table = three_coin_table();
        assert_eq!(most_sustainable(&table).unwrap().name, "Cardano");
    }

    #[test]
    fn test_most_sustainable_tie_keeps_first_seen() {
        let mut table = three_coin_table();
        table.insert(CoinRecord::new(
            "Tiecoin",
            "TIE",
            PriceTrend::Stable,
            MarketCap::Low,
            EnergyUse::Low,
            8,
        ));
        // Cardano was inserted before Tiecoin and wins the tie.
        assert_eq!(most_sustainable(&table).unwrap().name, "Cardano");
    }

    #[test]
    fn test_profitable_requires_high_cap() {
        let table = three_coin_table();
        let picks = profitable(&table);

        // Cardano is rising but medium-cap; only Bitcoin qualifies.
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].name, "Bitcoin");
    }

    #[test]
    fn test_composite_scores() {
        let table = three_coin_table();
        let scores: Vec<Decimal> = table.iter().map(composite_score).collect();

        // Bitcoin: (3 + 2 + 3) / 3, Ethereum: (1 + 2 + 6) / 3,
        // Cardano: (3 + 1 + 8) / 3.
        assert_eq!(scores[0], dec!(8) / dec!(3));
        assert_eq!(scores[1], dec!(3));
        assert_eq!(scores[2], dec!(4));
    }

    #[test]
    fn test_balanced_pick_is_deterministic() {
        let table = three_coin_table();
        let first = balanced_pick(&table).unwrap().name.clone();
        let second = balanced_pick(&table).unwrap().name.clone();

        assert_eq!(first, "Cardano");
        assert_eq!(first, second);
    }

    #[test]
    fn test_long_term_filter() {
        let table = CoinTable::seed();
        let picks = long_term(&table);

        // Cardano is the only rising, low-energy coin scoring above 7.
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].name, "Cardano");
    }

    #[test]
    fn test_empty_table() {
        let table = CoinTable::new();
        assert!(most_sustainable(&table).is_none());
        assert!(balanced_pick(&table).is_none());
        assert!(profitable(&table).is_empty());
    }
}
