//! Intent Responder
//!
//! Maps free-text questions to templated answers: normalize, classify
//! against the ordered rule list, then run the matching ranking or filter
//! routine over the coin table. `respond` is total over any input and
//! never panics; an unrecognized coin or an empty table renders a
//! user-facing message, not an error.

use advisor_core::{Intent, IntentRule, NormalizedQuery, Normalizer, RuleSet};

use crate::market::{self, MarketDataSource};
use crate::model::CoinRecord;
use crate::rank;
use crate::table::CoinTable;

/// Appended to every recommendation-bearing response.
pub const DISCLAIMER: &str =
    "\n\n⚠️  Disclaimer: crypto is risky. Always do your own research before investing!";

/// Printed by the console loop on exit keywords, and by the farewell
/// intent. One fixed string keeps identical queries giving identical text.
pub const FAREWELL: &str =
    "Goodbye! Remember to diversify and only invest what you can afford to lose.";

const GREETING: &str = "Hey there! I'm your crypto advisor.\n\n\
    💡 Ask me about:\n\
    • Sustainable coins\n\
    • Profitable picks\n\
    • A balanced recommendation\n\
    • A specific coin, e.g. \"tell me about Bitcoin\"";

const HELP: &str = "🤖 I can help you with:\n\
    • Finding sustainable cryptocurrencies 🌱\n\
    • Identifying profitable trends 📈\n\
    • Balanced investment recommendations ⚖️\n\
    • Details on a specific coin 📊\n\n\
    Try asking: \"What's the most sustainable crypto?\" or \"Tell me about Bitcoin\"";

const UNKNOWN: &str = "🤔 I'm not sure I understand. Try asking:\n\
    • \"What's the most sustainable coin?\"\n\
    • \"Which coins are profitable?\"\n\
    • \"Tell me about Ethereum\"\n\
    • \"Give me a balanced recommendation\"\n\
    Or type \"help\" for more options.";

const EMPTY_TABLE: &str = "I have no coin data at the moment. Please try again later.";

/// The question-answering responder. Owns the single table instance;
/// stateless across calls apart from market refreshes.
pub struct Responder {
    table: CoinTable,
    normalizer: Normalizer,
    rules: RuleSet,
}

impl Responder {
    /// Create a responder over an existing table.
    pub fn new(table: CoinTable) -> Self {
        let rules = build_rules(&table);
        Self {
            table,
            normalizer: Normalizer::new(),
            rules,
        }
    }

    /// Create a responder over the fixed seed table.
    pub fn with_seed_table() -> Self {
        Self::new(CoinTable::seed())
    }

    pub fn table(&self) -> &CoinTable {
        &self.table
    }

    /// Classify a raw query without producing a response.
    pub fn classify(&self, raw: &str) -> Intent {
        self.rules.classify(&self.normalizer.normalize(raw))
    }

    /// Answer a free-text question with a templated response.
    pub fn respond(&self, raw: &str) -> String {
        let query = self.normalizer.normalize(raw);
        let intent = self.rules.classify(&query);
        tracing::debug!(intent = %intent, "answering query");

        match intent {
            Intent::Greeting => GREETING.to_string(),
            Intent::Farewell => FAREWELL.to_string(),
            Intent::Help => HELP.to_string(),
            Intent::Unknown => UNKNOWN.to_string(),
            Intent::Sustainability => with_disclaimer(self.sustainability_response()),
            Intent::Profitability => with_disclaimer(self.profitability_response()),
            Intent::Balanced => with_disclaimer(self.balanced_response()),
            Intent::Trending => with_disclaimer(self.trending_response()),
            Intent::LongTerm => with_disclaimer(self.long_term_response()),
            Intent::CoinLookup => self.lookup_response(&query),
        }
    }

    /// Refresh every coin's dynamic attributes from a market source.
    /// Failures keep the previous values; returns the refreshed count.
    pub async fn refresh_all(&mut self, source: &dyn MarketDataSource) -> usize {
        let names: Vec<String> = self.table.iter().map(|c| c.name.clone()).collect();

        let mut refreshed = 0;
        for name in names {
            if market::refresh_coin(&mut self.table, source, &name).await {
                refreshed += 1;
            }
        }
        refreshed
    }

    fn sustainability_response(&self) -> String {
        let Some(coin) = rank::most_sustainable(&self.table) else {
            return EMPTY_TABLE.to_string();
        };

        let mut s = format!(
            "🌱 {} ({}) is your best bet for sustainability!\n",
            coin.name, coin.symbol
        );
        s.push_str(&format!("Sustainability score: {}\n", coin.score_display()));
        s.push_str(&format!("Energy use: {}", coin.energy_use.label()));
        if let Some(description) = &coin.description {
            s.push_str(&format!("\nWhy: {description}"));
        }
        s
    }

    fn profitability_response(&self) -> String {
        let picks = rank::profitable(&self.table);
        if picks.is_empty() {
            return "🤔 No coins currently meet the strict profitability rule \
                (rising trend with a high market cap). Consider waiting for better trends."
                .to_string();
        }

        let mut s = String::from("📈 For short-term profitability consider:\n");
        for coin in picks {
            s.push_str(&format!(
                "• {} ({}): trend {}, market cap {}\n",
                coin.name,
                coin.symbol,
                coin.price_trend.label(),
                coin.market_cap.label()
            ));
        }
        s.trim_end().to_string()
    }

    fn balanced_response(&self) -> String {
        let Some(coin) = rank::balanced_pick(&self.table) else {
            return EMPTY_TABLE.to_string();
        };

        let mut s = format!(
            "⚖️  For a balanced investment, consider {} ({}):\n",
            coin.name, coin.symbol
        );
        s.push_str(&format!("• Sustainability: {}\n", coin.score_display()));
        s.push_str(&format!("• Price trend: {}\n", coin.price_trend.label()));
        s.push_str(&format!("• Market cap: {}\n", coin.market_cap.label()));

        s.push_str("\nMarket overview:\n");
        s.push_str(&format!("• Rising: {}\n", join_names(&rank::rising(&self.table))));
        s.push_str(&format!("• Falling: {}", join_names(&rank::falling(&self.table))));
        s
    }

    fn trending_response(&self) -> String {
        let picks = rank::rising(&self.table);
        if picks.is_empty() {
            return "📉 Nothing is trending up right now.".to_string();
        }

        format!("📊 These coins are trending up: {}", join_names(&picks))
    }

    fn long_term_response(&self) -> String {
        let picks = rank::long_term(&self.table);
        if picks.is_empty() {
            return "🤔 No coin currently meets all the long-term growth criteria \
                (rising, top-tier sustainability, low energy use)."
                .to_string();
        }

        let mut s = String::from("🌿 Long-term growth candidates:\n");
        for coin in picks {
            s.push_str(&format!(
                "• {} ({}): rising with a sustainability score of {}\n",
                coin.name,
                coin.symbol,
                coin.score_display()
            ));
        }
        s.trim_end().to_string()
    }

    fn lookup_response(&self, query: &NormalizedQuery) -> String {
        let found = self.table.iter().find(|c| {
            query.has_token(&c.name.to_lowercase()) || query.has_token(&c.symbol.to_lowercase())
        });

        match found {
            Some(coin) => with_disclaimer(render_coin_card(coin)),
            None => format!(
                "🤷 Sorry, I don't have data on that coin yet. Try one of: {}.",
                self.table.names().join(", ")
            ),
        }
    }
}

fn with_disclaimer(body: String) -> String {
    format!("{body}{DISCLAIMER}")
}

fn join_names(coins: &[&CoinRecord]) -> String {
    if coins.is_empty() {
        return "none".to_string();
    }
    coins
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_coin_card(coin: &CoinRecord) -> String {
    let mut s = format!("📊 {} ({})\n", coin.name, coin.symbol);
    s.push_str(&format!("• Price trend: {}\n", coin.price_trend.label()));
    s.push_str(&format!("• Market cap: {}\n", coin.market_cap.label()));
    s.push_str(&format!("• Energy use: {}\n", coin.energy_use.label()));
    s.push_str(&format!("• Sustainability score: {}", coin.score_display()));
    if let Some(description) = &coin.description {
        s.push_str(&format!("\n• Description: {description}"));
    }
    if let Some(updated) = coin.last_updated {
        s.push_str(&format!("\n• Last updated: {}", updated.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    s
}

/// The ordered rule list. Order is semantic: earlier rules claim queries
/// that also mention later intents, and the lookup rule runs last so that
/// "the most sustainable coin" is a ranking question, not a lookup.
fn build_rules(table: &CoinTable) -> RuleSet {
    let mut lookup_keywords: Vec<String> = ["about", "info", "information", "details", "price"]
        .into_iter()
        .map(String::from)
        .collect();
    for coin in table.iter() {
        lookup_keywords.push(coin.name.to_lowercase());
        lookup_keywords.push(coin.symbol.to_lowercase());
    }

    RuleSet::new()
        .with_rule(IntentRule::new(
            Intent::Greeting,
            vec!["hi", "hello", "hey", "greetings", "howdy"],
        ))
        .with_rule(IntentRule::new(
            Intent::Farewell,
            vec!["bye", "goodbye", "farewell", "exit", "quit", "thanks", "thank you"],
        ))
        .with_rule(IntentRule::new(
            Intent::Sustainability,
            vec![
                "sustainable",
                "sustainability",
                "green",
                "eco",
                "environment",
                "environmental",
                "energy",
                "earth",
                "clean",
            ],
        ))
        .with_rule(IntentRule::new(
            Intent::Profitability,
            vec![
                "profit",
                "profitable",
                "profitability",
                "gain",
                "gains",
                "earn",
                "money",
                "return",
                "returns",
            ],
        ))
        .with_rule(IntentRule::new(
            Intent::Balanced,
            vec![
                "balanced",
                "balance",
                "best",
                "recommend",
                "recommendation",
                "advice",
                "suggest",
                "suggestion",
            ],
        ))
        .with_rule(IntentRule::new(
            Intent::Trending,
            vec!["trending", "trending up", "rising", "momentum"],
        ))
        .with_rule(IntentRule::new(
            Intent::LongTerm,
            vec!["long-term", "long term", "growth", "viability", "hodl"],
        ))
        .with_rule(IntentRule::new(
            Intent::Help,
            vec!["help", "commands", "options", "usage", "what can you do"],
        ))
        .with_rule(IntentRule::new(Intent::CoinLookup, lookup_keywords))
}
