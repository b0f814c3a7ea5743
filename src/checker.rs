//! One-call spell checking: membership verdict plus ranked suggestions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::Lexicon;
use crate::suggest::{SuggestConfig, Suggestion, SuggestionEngine};

/// Outcome of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The word that was checked.
    pub word: String,
    /// Whether the word is present in the lexicon.
    pub correct: bool,
    /// Closest lexicon words, ascending by edit distance.
    pub suggestions: Vec<Suggestion>,
}

impl CheckResult {
    /// Check if any suggestions were found.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Get the closest suggestion, if any.
    pub fn best_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// Spell checker combining membership lookup and suggestion ranking
/// over one vocabulary.
pub struct SpellChecker {
    engine: SuggestionEngine,
}

impl SpellChecker {
    /// Create a checker with default suggestion parameters.
    pub fn new(lexicon: Lexicon) -> Self {
        SpellChecker {
            engine: SuggestionEngine::new(lexicon),
        }
    }

    /// Create a checker with custom suggestion parameters.
    pub fn with_config(lexicon: Lexicon, config: SuggestConfig) -> Self {
        SpellChecker {
            engine: SuggestionEngine::with_config(lexicon, config),
        }
    }

    /// Check a word, returning the membership verdict together with the
    /// closest lexicon words.
    ///
    /// Suggestions are computed the same way for correct and misspelled
    /// words; the verdict and the suggestion list are independent.
    ///
    /// # Errors
    ///
    /// Fails for an empty word or a configuration asking for zero
    /// suggestions, exactly as [`SuggestionEngine::suggest`] does.
    pub fn check(&self, word: &str) -> Result<CheckResult> {
        let suggestions = self.engine.suggest(word)?;

        Ok(CheckResult {
            word: word.to_string(),
            correct: self.engine.contains(word),
            suggestions,
        })
    }

    /// Check whether a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.engine.contains(word)
    }

    /// Get suggestions for a word without the membership verdict.
    pub fn suggest(&self, word: &str) -> Result<Vec<Suggestion>> {
        self.engine.suggest(word)
    }

    /// Number of words known to the checker.
    pub fn word_count(&self) -> usize {
        self.engine.word_count()
    }
}
