//! DuckDuckGo Instant Answer lookup.
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/),
//! which needs no API key. Only `AbstractText` is used; answers,
//! definitions and related topics are ignored.

use super::no_data_from;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use tracktools_application::DescriptionSource;
use tracktools_domain::{LookupOutcome, NoDataReason};

/// DuckDuckGo Instant Answer API endpoint (no API key required).
pub const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// Instant-answer source backed by DuckDuckGo.
pub struct DuckDuckGoInstantAnswerSource {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoInstantAnswerSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, DDG_API_URL)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Pull the first sentence of `AbstractText` out of an API response.
fn extract_abstract(body: &serde_json::Value) -> LookupOutcome {
    LookupOutcome::from_field("AbstractText", body["AbstractText"].as_str())
}

#[async_trait]
impl DescriptionSource for DuckDuckGoInstantAnswerSource {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    async fn lookup(&self, tool_name: &str) -> LookupOutcome {
        debug!("GET {} q={}", self.endpoint, tool_name);
        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", tool_name),
                ("format", "json"),
                ("no_redirect", "1"),
                ("no_html", "1"),
            ])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return LookupOutcome::NoData(no_data_from(e)),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return LookupOutcome::NoData(NoDataReason::HttpStatus(status.as_u16()));
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => extract_abstract(&body),
            Err(e) => LookupOutcome::NoData(no_data_from(e)),
        }
    }
}
