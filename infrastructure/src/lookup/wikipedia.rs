//! Wikipedia REST summary lookup.
//!
//! `GET {base}/{title}` where `title` is the tool name with spaces replaced
//! by underscores. A 200 response with a non-empty `extract` yields the
//! extract's first sentence.

use super::no_data_from;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;
use tracktools_application::DescriptionSource;
use tracktools_domain::{LookupOutcome, NoDataReason};

/// Wikipedia REST API page summary endpoint (English).
pub const WIKIPEDIA_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";

/// Encyclopedia source backed by the Wikipedia REST API.
pub struct WikipediaSummarySource {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaSummarySource {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, WIKIPEDIA_SUMMARY_URL)
    }

    /// Point the source at another summary endpoint.
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Summary URL for `tool_name`, with the title percent-encoded as a
    /// single path segment.
    pub fn summary_url(&self, tool_name: &str) -> Option<Url> {
        let title = tool_name.replace(' ', "_");
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(&title);
        Some(url)
    }
}

/// Pull the first sentence of `extract` out of a summary body.
fn extract_summary(body: &serde_json::Value) -> LookupOutcome {
    LookupOutcome::from_field("extract", body["extract"].as_str())
}

#[async_trait]
impl DescriptionSource for WikipediaSummarySource {
    fn name(&self) -> &'static str {
        "wikipedia"
    }

    async fn lookup(&self, tool_name: &str) -> LookupOutcome {
        let Some(url) = self.summary_url(tool_name) else {
            return LookupOutcome::NoData(NoDataReason::Transport(format!(
                "invalid summary URL base: {}",
                self.base_url
            )));
        };

        debug!("GET {}", url);
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return LookupOutcome::NoData(no_data_from(e)),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return LookupOutcome::NoData(NoDataReason::HttpStatus(status.as_u16()));
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => extract_summary(&body),
            Err(e) => LookupOutcome::NoData(no_data_from(e)),
        }
    }
}
