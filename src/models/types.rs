//! Core types shared across the pipeline stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deadband half-width: compound scores inside (-0.05, 0.05) are Neutral.
pub const COMPOUND_THRESHOLD: f64 = 0.05;

/// Three-way sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound score against the fixed ±0.05 deadband.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= COMPOUND_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= -COMPOUND_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored headline. Field names are renamed to match the CSV header
/// `Headline,Compound_Score,Sentiment_Label`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    #[serde(rename = "Headline")]
    pub headline: String,
    /// Normalized compound polarity in [-1.0, 1.0]
    #[serde(rename = "Compound_Score")]
    pub compound_score: f64,
    #[serde(rename = "Sentiment_Label")]
    pub label: SentimentLabel,
}

/// Count labels across a result set, ordered by descending frequency.
/// Ties keep the order in which the label first appeared in the results.
pub fn summarize(results: &[SentimentResult]) -> Vec<(SentimentLabel, usize)> {
    let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();

    for result in results {
        match counts.iter_mut().find(|(label, _)| *label == result.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((result.label, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
