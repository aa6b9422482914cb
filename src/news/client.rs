//! HTTP client for the news-search API

use crate::config::Config;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Failure kinds of the live fetch path
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("news API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for the news-search API (`/v2/everything`)
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    query: String,
    sort_by: String,
    language: String,
}

impl NewsApiClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            query: config.query.clone(),
            sort_by: config.sort_by.clone(),
            language: config.language.clone(),
        }
    }

    /// Fetch article titles matching the configured query, in the order the
    /// API returns them. Articles without a title are skipped.
    pub async fn fetch_headlines(&self, api_key: &str) -> Result<Vec<String>, NewsError> {
        let url = format!("{}/v2/everything", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", self.query.as_str()),
                ("sortBy", self.sort_by.as_str()),
                ("language", self.language.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NewsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: NewsApiResponse = response.json().await?;

        if api_response.status != "ok" {
            return Err(NewsError::Api {
                status: status.as_u16(),
                message: api_response
                    .message
                    .unwrap_or_else(|| api_response.status.clone()),
            });
        }

        let headlines = api_response
            .articles
            .into_iter()
            .filter_map(|article| article.title)
            .filter(|title| !title.is_empty())
            .collect();

        Ok(headlines)
    }
}

// ============= API Response Types =============

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
}
