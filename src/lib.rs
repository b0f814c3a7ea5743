//! # Nearword
//!
//! Approximate dictionary lookup for Rust: exact membership testing
//! over a fixed vocabulary, and edit-distance ranked suggestions for
//! near misses.
//!
//! ## Features
//!
//! - Ordered in-memory word index built once from any word collection
//! - Levenshtein distance with a bounded early-exit variant
//! - Distance-ranked, bounded suggestion lists
//! - One-call spell checking with verdict and suggestions
//!
//! ## Example
//!
//! ```
//! use nearword::{Lexicon, SpellChecker};
//!
//! let lexicon = Lexicon::from_words(["cat", "cot", "cut", "dog"]);
//! let checker = SpellChecker::new(lexicon);
//!
//! let report = checker.check("cst")?;
//! assert!(!report.correct);
//! assert!(report.suggestions.iter().any(|s| s.word == "cat"));
//! # Ok::<(), nearword::NearwordError>(())
//! ```

pub mod checker;
pub mod error;
pub mod index;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use checker::{CheckResult, SpellChecker};
pub use error::{NearwordError, Result};
pub use index::Lexicon;
pub use levenshtein::{levenshtein_distance, levenshtein_distance_bounded};
pub use suggest::{SuggestConfig, Suggestion, SuggestionEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
