//! Edit-distance ranked suggestion generation.
//!
//! A [`SuggestionEngine`] scans the full in-order enumeration of a
//! [`Lexicon`] on every query, retains the words within the configured
//! edit distance, and returns them ranked ascending by distance. The
//! relative order of words at the same distance is unspecified.

use serde::{Deserialize, Serialize};

use crate::error::{NearwordError, Result};
use crate::index::Lexicon;
use crate::levenshtein::levenshtein_distance_bounded;

/// A dictionary word proposed for a query, with its edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

/// Parameters controlling a suggestion scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Maximum edit distance a word may have to qualify. Zero is legal
    /// and degenerates to exact matching.
    pub max_distance: usize,
    /// Maximum number of suggestions to return. Must be at least 1.
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            max_distance: 2,
            max_suggestions: 5,
        }
    }
}

impl SuggestConfig {
    /// Check the caller contract.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(NearwordError::invalid_parameter(
                "max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Suggestion engine over a fixed vocabulary.
///
/// The engine owns the lexicon and is read-only after construction, so
/// a shared reference can serve queries from any number of callers.
pub struct SuggestionEngine {
    lexicon: Lexicon,
    config: SuggestConfig,
}

impl SuggestionEngine {
    /// Create an engine with the default configuration.
    pub fn new(lexicon: Lexicon) -> Self {
        SuggestionEngine {
            lexicon,
            config: SuggestConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(lexicon: Lexicon, config: SuggestConfig) -> Self {
        SuggestionEngine { lexicon, config }
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: SuggestConfig) {
        self.config = config;
    }

    /// The active configuration.
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// The underlying lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Propose the lexicon words closest to `query`, ascending by edit
    /// distance and truncated to `max_suggestions`.
    ///
    /// A query that is itself a lexicon word is ranked like any other
    /// candidate (at distance zero); membership is reported separately
    /// by [`SuggestionEngine::contains`]. Fewer than `max_suggestions`
    /// results, or none at all, is a normal outcome.
    ///
    /// # Errors
    ///
    /// [`NearwordError::EmptyQuery`] when `query` is empty, and
    /// [`NearwordError::InvalidParameter`] when the configuration asks
    /// for zero suggestions.
    pub fn suggest(&self, query: &str) -> Result<Vec<Suggestion>> {
        self.config.validate()?;
        if query.is_empty() {
            return Err(NearwordError::EmptyQuery);
        }

        let mut candidates = Vec::new();
        for word in self.lexicon.iter() {
            if let Some(distance) =
                levenshtein_distance_bounded(query, word, self.config.max_distance)
            {
                candidates.push(Suggestion::new(word.to_string(), distance));
            }
        }

        // Unstable sort: words at the same distance keep no particular
        // relative order.
        candidates.sort_unstable_by_key(|s| s.distance);
        candidates.truncate(self.config.max_suggestions);

        Ok(candidates)
    }

    /// Check whether a word is present in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Number of words in the lexicon.
    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "cot", "cut", "dog"])
    }

    #[test]
    fn test_suggest_ranks_by_distance() {
        let engine = SuggestionEngine::new(sample_lexicon());

        let suggestions = engine.suggest("cat").unwrap();

        // "cat" itself sits at distance zero, "cot"/"cut" at one;
        // "dog" (distance 3) is past the default threshold.
        assert_eq!(suggestions[0].word, "cat");
        assert_eq!(suggestions[0].distance, 0);

        let tier_one: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.distance == 1)
            .map(|s| s.word.as_str())
            .collect();
        assert_eq!(tier_one.len(), 2);
        assert!(tier_one.contains(&"cot"));
        assert!(tier_one.contains(&"cut"));

        assert!(suggestions.iter().all(|s| s.word != "dog"));
        assert!(suggestions.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_threshold_filters_candidates() {
        let config = SuggestConfig {
            max_distance: 1,
            max_suggestions: 5,
        };
        let engine = SuggestionEngine::with_config(sample_lexicon(), config);

        let suggestions = engine.suggest("cut").unwrap();
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();

        assert!(words.contains(&"cut"));
        assert!(words.contains(&"cat"));
        assert!(words.contains(&"cot"));
        assert!(!words.contains(&"dog"));
    }

    #[test]
    fn test_max_suggestions_truncates() {
        let config = SuggestConfig {
            max_distance: 2,
            max_suggestions: 2,
        };
        let engine = SuggestionEngine::with_config(sample_lexicon(), config);

        let suggestions = engine.suggest("cat").unwrap();

        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].distance <= suggestions[1].distance);
    }

    #[test]
    fn test_zero_threshold_degenerates_to_exact_match() {
        let config = SuggestConfig {
            max_distance: 0,
            max_suggestions: 5,
        };
        let engine = SuggestionEngine::with_config(sample_lexicon(), config);

        let exact = engine.suggest("cat").unwrap();
        assert_eq!(exact, vec![Suggestion::new("cat".to_string(), 0)]);

        let miss = engine.suggest("cap").unwrap();
        assert!(miss.is_empty());
    }

    #[test]
    fn test_empty_lexicon_yields_no_suggestions() {
        let engine = SuggestionEngine::new(Lexicon::new());

        assert!(engine.suggest("anything").unwrap().is_empty());
        assert!(!engine.contains("anything"));
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let engine = SuggestionEngine::new(sample_lexicon());

        assert!(matches!(
            engine.suggest(""),
            Err(NearwordError::EmptyQuery)
        ));
    }

    #[test]
    fn test_zero_max_suggestions_is_rejected() {
        let config = SuggestConfig {
            max_distance: 2,
            max_suggestions: 0,
        };
        let engine = SuggestionEngine::with_config(sample_lexicon(), config);

        assert!(matches!(
            engine.suggest("cat"),
            Err(NearwordError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_results_stay_within_contract() {
        let lexicon = Lexicon::from_words([
            "word", "ward", "wood", "wild", "world", "sword", "cord", "worn", "work",
        ]);
        let engine = SuggestionEngine::new(lexicon);

        let suggestions = engine.suggest("wird").unwrap();

        assert!(suggestions.len() <= engine.config().max_suggestions);
        for suggestion in &suggestions {
            assert!(suggestion.distance <= engine.config().max_distance);
            assert!(engine.contains(&suggestion.word));
        }
        assert!(suggestions.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_misspelling_finds_neighbors() {
        let engine = SuggestionEngine::new(sample_lexicon());

        let suggestions = engine.suggest("catt").unwrap();

        assert!(suggestions.iter().any(|s| s.word == "cat" && s.distance == 1));
    }
}
