//! Headline acquisition
//!
//! Supplies the ordered batch of headlines the scorer consumes. With an API
//! key configured the batch comes from the news API; otherwise, or whenever
//! the fetch fails, the pipeline falls back to the built-in sample headlines.
//! The fallback is carried in the batch itself rather than signalled through
//! errors, so callers can always proceed with whatever headlines they got.

mod client;

pub use client::{NewsApiClient, NewsError};

use crate::config::Config;
use tracing::{info, warn};

/// The ten fixed sample headlines used when no live feed is available.
const SAMPLE_HEADLINES: [&str; 10] = [
    "Major Investment Firm announces $1 Billion Bitcoin acquisition, boosting market confidence.",
    "Regulatory crackdown in Asia causes brief market instability and fear.",
    "New decentralized finance (DeFi) project launches with strong community support.",
    "Cryptocurrency exchange suffers security breach, resulting in minor losses.",
    "BTC price maintains steady rise, signaling strong investor holding.",
    "Analyst warns of upcoming correction after three weeks of extreme volatility.",
    "Blockchain technology adopted by global logistics company for supply chain efficiency.",
    "Social media speculation drives minor meme coin prices to new highs.",
    "Inflation concerns push more institutional investors toward Bitcoin as a hedge.",
    "Energy usage of mining operations criticized in environmental report.",
];

/// Where a batch of headlines came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineOrigin {
    /// Fetched live from the news API
    Api,
    /// Built-in sample list; `reason` records the fetch failure that forced
    /// the fallback, if there was one.
    Sample { reason: Option<String> },
}

/// An ordered batch of headlines plus its provenance
#[derive(Debug, Clone)]
pub struct HeadlineBatch {
    pub headlines: Vec<String>,
    pub origin: HeadlineOrigin,
}

impl HeadlineBatch {
    fn sample(reason: Option<String>) -> Self {
        Self {
            headlines: sample_headlines(),
            origin: HeadlineOrigin::Sample { reason },
        }
    }
}

/// The built-in sample list as owned strings, in fixed order.
pub fn sample_headlines() -> Vec<String> {
    SAMPLE_HEADLINES.iter().map(|s| s.to_string()).collect()
}

/// Acquire a batch of headlines, falling back to the sample list when the
/// live fetch is unavailable or fails.
pub async fn fetch_headlines(config: &Config) -> HeadlineBatch {
    let Some(api_key) = &config.api_key else {
        return HeadlineBatch::sample(None);
    };

    let client = NewsApiClient::new(config);
    match client.fetch_headlines(api_key).await {
        Ok(headlines) if !headlines.is_empty() => {
            info!(count = headlines.len(), "fetched headlines from news API");
            HeadlineBatch {
                headlines,
                origin: HeadlineOrigin::Api,
            }
        }
        Ok(_) => {
            warn!("news API returned no headlines, using sample data");
            HeadlineBatch::sample(Some("API returned no headlines".to_string()))
        }
        Err(e) => {
            warn!(error = %e, "news API fetch failed, using sample data");
            HeadlineBatch::sample(Some(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_headlines_fixed() {
        let headlines = sample_headlines();
        assert_eq!(headlines.len(), 10);
        assert!(headlines.iter().all(|h| !h.is_empty()));
        assert!(headlines[0].contains("Bitcoin acquisition"));
    }

    #[tokio::test]
    async fn test_no_api_key_uses_samples_without_reason() {
        let config = Config::default();
        let batch = fetch_headlines(&config).await;

        assert_eq!(batch.origin, HeadlineOrigin::Sample { reason: None });
        assert_eq!(batch.headlines, sample_headlines());
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_with_reason() {
        // Unroutable base URL forces a client-side failure.
        let config = Config {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
            ..Config::default()
        };

        let batch = fetch_headlines(&config).await;

        match batch.origin {
            HeadlineOrigin::Sample { reason: Some(_) } => {}
            other => panic!("expected sample fallback with reason, got {:?}", other),
        }
        assert_eq!(batch.headlines.len(), 10);
    }
}
