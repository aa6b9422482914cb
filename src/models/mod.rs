//! Data model for the sentiment pipeline

mod types;

pub use types::{summarize, SentimentLabel, SentimentResult, COMPOUND_THRESHOLD};
