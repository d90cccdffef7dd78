//! # advisor-core
//!
//! Intent classification core for the coin advisor: query normalization and
//! an ordered keyword rule list with first-match-wins semantics.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      advisor-core                           │
//! │  ┌──────────────┐        ┌────────────────────────────────┐ │
//! │  │  Normalizer  │───────▶│  RuleSet (ordered IntentRules) │ │
//! │  │  lowercase,  │ tokens │  first rule with a keyword hit │ │
//! │  │  stopwords   │        │  wins; fallback = Unknown      │ │
//! │  └──────────────┘        └────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rule order is load-bearing: a query containing keywords of several
//! intents resolves to the earliest rule, so the list is an explicit,
//! priority-ordered sequence rather than a hash dispatch.

pub mod analysis;
pub mod intent;

pub use analysis::{NormalizedQuery, Normalizer};
pub use intent::{Intent, IntentRule, RuleSet};
