//! **Description lookups**: Wikipedia and DuckDuckGo adapters
//!
//! Both adapters implement
//! [`DescriptionSource`](tracktools_application::DescriptionSource) over a
//! shared [`reqwest::Client`] built by [`build_http_client`].
//!
//! | Source | Endpoint | Field |
//! |--------|----------|-------|
//! | [`WikipediaSummarySource`] | `en.wikipedia.org/api/rest_v1/page/summary/{title}` | `extract` |
//! | [`DuckDuckGoInstantAnswerSource`] | `api.duckduckgo.com/?q=…&format=json` | `AbstractText` |
//!
//! Every request carries [`USER_AGENT`] and is bounded by [`LOOKUP_TIMEOUT`].
//! There are no retries.

mod duckduckgo;
mod wikipedia;

pub use duckduckgo::{DDG_API_URL, DuckDuckGoInstantAnswerSource};
pub use wikipedia::{WIKIPEDIA_SUMMARY_URL, WikipediaSummarySource};

use std::time::Duration;
use tracktools_domain::NoDataReason;

/// User agent sent with every lookup.
pub const USER_AGENT: &str = "WinToolsTableGenerator/1.0";

/// Per-request timeout (connect + response).
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the HTTP client shared by both lookup sources.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(LOOKUP_TIMEOUT)
        .build()
}

/// Classify a `reqwest` error from sending or reading a response.
fn no_data_from(err: reqwest::Error) -> NoDataReason {
    if err.is_decode() {
        NoDataReason::Decode(err.to_string())
    } else {
        NoDataReason::Transport(err.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(build_http_client().is_ok());
    }

    #[test]
    fn test_constants() {
        assert_eq!(USER_AGENT, "WinToolsTableGenerator/1.0");
        assert_eq!(LOOKUP_TIMEOUT, Duration::from_secs(5));
    }
}
