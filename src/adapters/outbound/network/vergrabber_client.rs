use crate::adapters::outbound::vergrabber_document::parse_document;
use crate::ports::outbound::{CatalogDocument, CatalogSource};
use crate::shared::error::UpdateCheckError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Public vergrabber feed
pub const DEFAULT_VERGRABBER_URL: &str = "http://vergrabber.kingu.pl/vergrabber.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;

/// VergrabberClient adapter for downloading the release catalog
///
/// Implements the CatalogSource port over HTTP. Failed attempts are retried
/// with a linearly growing pause; the last error is reported.
pub struct VergrabberClient {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl VergrabberClient {
    /// Creates a client for the public feed
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_VERGRABBER_URL)
    }

    /// Creates a client for a mirror of the feed
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the HTTP client cannot be built
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        Self::validate_url(&url)?;

        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("update-checker/{}", version))
            .build()?;

        Ok(Self {
            client,
            url,
            max_retries: MAX_RETRIES,
            retry_delay: Duration::from_millis(500),
        })
    }

    /// Overrides the base pause between attempts
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn validate_url(url: &str) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(UpdateCheckError::Validation {
                message: format!("catalog URL must start with http:// or https://, got \"{}\"", url),
            }
            .into());
        }
        Ok(())
    }

    async fn fetch_with_retry(&self) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.download().await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "catalog download failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.retry_delay * attempt).await;
                    }
                }
            }
        }

        let details = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt was made".to_string());
        Err(UpdateCheckError::CatalogFetchError {
            url: self.url.clone(),
            details,
        }
        .into())
    }

    async fn download(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("server returned status code {}", response.status());
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CatalogSource for VergrabberClient {
    async fn fetch_catalog(&self) -> Result<CatalogDocument> {
        tracing::info!(url = %self.url, "downloading release catalog");
        let body = self.fetch_with_retry().await?;
        parse_document(&body, &self.url)
    }

    fn source_name(&self) -> String {
        self.url.clone()
    }
}
