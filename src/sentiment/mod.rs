//! Sentiment scoring
//!
//! Lexicon/rule-based additive model: per-token valences from an external
//! lexicon, adjusted for negation, boosters, ALL-CAPS emphasis and
//! exclamation marks, normalized to a compound score in [-1, 1].

mod analyzer;
mod lexicon;

pub use analyzer::SentimentAnalyzer;
pub use lexicon::{Lexicon, SentimentError};
