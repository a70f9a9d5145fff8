//! Description source port
//!
//! Defines the interface for remote services that can describe a tool by
//! name (encyclopedia summaries, instant-answer APIs).

use async_trait::async_trait;
use tracktools_domain::{LookupOutcome, NoDataReason};

/// A best-effort source of one-sentence tool descriptions.
///
/// Implementations must not fail: every problem (timeout, connection
/// error, unexpected status, malformed body, missing field) is reported as
/// [`LookupOutcome::NoData`] with a reason, so the resolver can fall
/// through to the next source.
#[async_trait]
pub trait DescriptionSource: Send + Sync {
    /// Short identifier used in logs (e.g. `wikipedia`)
    fn name(&self) -> &'static str;

    /// Look up a description for `tool_name`.
    async fn lookup(&self, tool_name: &str) -> LookupOutcome;
}

/// Source that never answers. Used for offline runs.
pub struct DisabledSource;

#[async_trait]
impl DescriptionSource for DisabledSource {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn lookup(&self, _tool_name: &str) -> LookupOutcome {
        LookupOutcome::NoData(NoDataReason::Disabled)
    }
}
