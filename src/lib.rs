//! # crypto-sentiment
//!
//! Lexicon-based sentiment analysis for cryptocurrency news headlines.
//!
//! Three-stage linear pipeline:
//!
//! 1. `news` - acquire an ordered batch of headlines (live news API with an
//!    explicit fallback to built-in sample data)
//! 2. `sentiment` - score each headline with an additive lexicon/rule model
//!    into a compound polarity in [-1, 1] and a three-way label
//! 3. `report` - console table, label-frequency summary, CSV flat file
//!
//! ## Modules
//!
//! - `config` - pipeline configuration
//! - `models` - result and label types
//! - `news` - headline acquisition
//! - `sentiment` - compound scoring
//! - `report` - console and CSV output
//! - `pipeline` - orchestration of the three stages

pub mod config;
pub mod models;
pub mod news;
pub mod pipeline;
pub mod report;
pub mod sentiment;

pub use config::Config;
pub use models::{summarize, SentimentLabel, SentimentResult};
pub use news::{fetch_headlines, HeadlineBatch, HeadlineOrigin};
pub use pipeline::PipelineOutcome;
pub use sentiment::{Lexicon, SentimentAnalyzer, SentimentError};
