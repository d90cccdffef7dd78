//! Coin Advisor Console
//!
//! Read-line/print-line loop around the responder. Exit keywords end the
//! session with a farewell; empty input re-prompts without touching the
//! classifier; with live data enabled, the table is refreshed before each
//! query and falls back to stale values when the source is unreachable.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coin_advisor::market::CoinGeckoSource;
use coin_advisor::responder::FAREWELL;
use coin_advisor::{MarketDataSource, Responder};

/// Exact inputs that terminate the loop without invoking the responder.
const EXIT_KEYWORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let source = market_source().await;
    let mut responder = Responder::with_seed_table();

    println!("════════════════════════════════════════════════");
    println!("🚀 Coin Advisor (type 'help' for options, 'exit' to quit)");
    println!("════════════════════════════════════════════════");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF ends the session like an exit keyword would.
            println!("\nAdvisor: {FAREWELL}");
            break;
        };

        let input = line.trim();

        if input.is_empty() {
            println!("Advisor: 🤔 You didn't say anything. Ask me about crypto!");
            continue;
        }

        if EXIT_KEYWORDS.contains(&input.to_lowercase().as_str()) {
            println!("Advisor: {FAREWELL}");
            break;
        }

        if let Some(source) = source.as_deref() {
            let refreshed = responder.refresh_all(source).await;
            tracing::debug!(refreshed, "pre-query market refresh");
        }

        println!("\nAdvisor: {}", responder.respond(input));
    }

    Ok(())
}

/// Pick the market data source for this session. Live data is opt-in via
/// ADVISOR_LIVE_DATA; without it the seed table answers every query. An
/// unreachable CoinGecko degrades to stale data rather than refusing to
/// start.
async fn market_source() -> Option<Box<dyn MarketDataSource>> {
    let live = std::env::var("ADVISOR_LIVE_DATA")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if !live {
        tracing::info!("live market data disabled, answering from the seed table");
        return None;
    }

    match CoinGeckoSource::from_env() {
        Ok(source) => {
            if source.health_check().await {
                tracing::info!("✓ Connected to CoinGecko");
            } else {
                tracing::warn!("⚠ CoinGecko unreachable, queries will use stale data");
            }
            Some(Box::new(source))
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not build CoinGecko client, refresh disabled");
            None
        }
    }
}
