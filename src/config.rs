//! Pipeline configuration
//!
//! Replaces the scattered constants (API key, query terms, output path) with
//! one structure that is passed into the pipeline explicitly.

use std::path::PathBuf;

/// Configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct Config {
    /// News API key. `None` keeps the pipeline on the built-in sample
    /// headlines without attempting a network fetch.
    pub api_key: Option<String>,
    /// Search query sent to the news API
    pub query: String,
    /// Sort order parameter for the news API
    pub sort_by: String,
    /// Two-letter language code for the news API
    pub language: String,
    /// Base URL of the news API
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Path to the tab-separated sentiment lexicon
    pub lexicon_path: PathBuf,
    /// Path of the CSV results file
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            query: "Bitcoin OR Cryptocurrency OR BTC".to_string(),
            sort_by: "publishedAt".to_string(),
            language: "en".to_string(),
            base_url: "https://newsapi.org".to_string(),
            timeout_secs: 30,
            lexicon_path: PathBuf::from("data/vader_lexicon.txt"),
            output_path: PathBuf::from("crypto_sentiment_results.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.query, "Bitcoin OR Cryptocurrency OR BTC");
        assert_eq!(config.sort_by, "publishedAt");
        assert_eq!(config.language, "en");
        assert!(config.api_key.is_none());
        assert_eq!(
            config.output_path,
            PathBuf::from("crypto_sentiment_results.csv")
        );
    }
}
