//! # coin-advisor
//!
//! Keyword-driven cryptocurrency Q&A over a small in-memory table of coin
//! attributes. Free text goes in, a templated recommendation comes out.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Responder                             │
//! │  raw text ─▶ Normalizer ─▶ RuleSet ─▶ intent handler         │
//! │                                          │                   │
//! │                 ┌────────────────────────┘                   │
//! │                 ▼                                            │
//! │             CoinTable  ◀── market refresh (optional,         │
//! │        (insertion order)    stale values kept on failure)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The intelligence is deliberately thin: an ordered keyword rule list and
//! three scoring formulas (max-by-score, filter-by-predicate, composite
//! blend) over a handful of records. Determinism is the design goal; the
//! same question against an unchanged table always gets the same answer.

pub mod error;
pub mod market;
pub mod model;
pub mod rank;
pub mod responder;
pub mod table;

pub use error::{AdvisorError, Result};
pub use market::{MarketDataSource, MarketSnapshot};
pub use model::{CoinRecord, EnergyUse, MarketCap, MarketUpdate, PriceTrend};
pub use responder::Responder;
pub use table::CoinTable;
