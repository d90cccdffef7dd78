//! Intent Classification
//!
//! An ordered list of keyword rules evaluated in sequence. The first rule
//! with a hit wins; there is no scoring across rules, so list order decides
//! which intent claims a query that mentions several topics.

use serde::{Deserialize, Serialize};

use crate::analysis::NormalizedQuery;

/// A coarse category of user request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Sustainability,
    Profitability,
    Balanced,
    Trending,
    LongTerm,
    Help,
    CoinLookup,
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Sustainability => "sustainability",
            Self::Profitability => "profitability",
            Self::Balanced => "balanced",
            Self::Trending => "trending",
            Self::LongTerm => "long_term",
            Self::Help => "help",
            Self::CoinLookup => "coin_lookup",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// One entry in the ordered rule list.
#[derive(Clone, Debug)]
pub struct IntentRule {
    /// Intent this rule selects.
    pub intent: Intent,

    /// Trigger keywords. A keyword containing any non-alphanumeric
    /// character ("trending up", "long-term") is matched as a substring of
    /// the normalized text; a plain word is matched against the token set.
    pub keywords: Vec<String>,
}

impl IntentRule {
    pub fn new<I, S>(intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            intent,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any keyword of this rule hits the query.
    pub fn matches(&self, query: &NormalizedQuery) -> bool {
        self.keywords.iter().any(|kw| {
            if kw.chars().all(char::is_alphanumeric) {
                query.has_token(kw)
            } else {
                query.has_phrase(kw)
            }
        })
    }
}

/// Priority-ordered rule list with first-match-wins classification.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<IntentRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Later rules only fire when no earlier rule matched.
    pub fn push(&mut self, rule: IntentRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with_rule(mut self, rule: IntentRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Classify a normalized query. Walks the rules in insertion order and
    /// returns the first match, or [`Intent::Unknown`] when nothing hits.
    pub fn classify(&self, query: &NormalizedQuery) -> Intent {
        for rule in &self.rules {
            if rule.matches(query) {
                tracing::debug!(intent = %rule.intent, "matched intent rule");
                return rule.intent;
            }
        }

        tracing::debug!("no intent rule matched, falling back to unknown");
        Intent::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Normalizer;

    fn sample_rules() -> RuleSet {
        RuleSet::new()
            .with_rule(IntentRule::new(Intent::Greeting, vec!["hi", "hello"]))
            .with_rule(IntentRule::new(
                Intent::Sustainability,
                vec!["sustainable", "green", "eco"],
            ))
            .with_rule(IntentRule::new(
                Intent::Profitability,
                vec!["profit", "profitable", "gains"],
            ))
    }

    #[test]
    fn test_first_match_wins() {
        let rules = sample_rules();
        let normalizer = Normalizer::new();

        // Mentions both sustainability and profitability; the earlier
        // sustainability rule must claim it.
        let query = normalizer.normalize("profitable and sustainable coins");
        assert_eq!(rules.classify(&query), Intent::Sustainability);
    }

    #[test]
    fn test_token_keyword_match() {
        let rules = sample_rules();
        let normalizer = Normalizer::new();

        let query = normalizer.normalize("any green coins out there?");
        assert_eq!(rules.classify(&query), Intent::Sustainability);
    }

    #[test]
    fn test_phrase_keyword_match() {
        let rules = RuleSet::new().with_rule(IntentRule::new(
            Intent::Trending,
            vec!["trending up".to_string()],
        ));
        let normalizer = Normalizer::new();

        let query = normalizer.normalize("what is trending up today");
        assert_eq!(rules.classify(&query), Intent::Trending);
    }

    #[test]
    fn test_hyphenated_keyword_matches_as_phrase() {
        let rules = RuleSet::new().with_rule(IntentRule::new(
            Intent::LongTerm,
            vec!["long-term".to_string()],
        ));
        let normalizer = Normalizer::new();

        let query = normalizer.normalize("thinking long-term here");
        assert_eq!(rules.classify(&query), Intent::LongTerm);
    }

    #[test]
    fn test_unknown_fallback() {
        let rules = sample_rules();
        let normalizer = Normalizer::new();

        let query = normalizer.normalize("weather forecast for tomorrow");
        assert_eq!(rules.classify(&query), Intent::Unknown);
    }

    #[test]
    fn test_keyword_is_not_substring_of_token() {
        let rules = sample_rules();
        let normalizer = Normalizer::new();

        // "profiteering" contains "profit" but is a different token.
        let query = normalizer.normalize("profiteering elsewhere");
        assert_eq!(rules.classify(&query), Intent::Unknown);
    }
}
