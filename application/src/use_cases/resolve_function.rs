//! Resolve Function use case.
//!
//! Turns a normalized tool name into a one-sentence description:
//!
//! 1. Ask the encyclopedia source
//! 2. If it has no data, ask the instant-answer source
//! 3. If neither has data, use [`FALLBACK_DESCRIPTION`](tracktools_domain::FALLBACK_DESCRIPTION)
//!
//! The order is fixed by the constructor. Sources are consulted one at a
//! time and the first `Found` wins; later sources are not called.

use crate::ports::description_source::{DescriptionSource, DisabledSource};
use std::sync::Arc;
use tracing::debug;
use tracktools_domain::{DescriptionOrigin, LookupOutcome, ResolvedDescription};

/// Use case for resolving a tool's function description.
#[derive(Clone)]
pub struct ResolveFunctionUseCase {
    encyclopedia: Arc<dyn DescriptionSource>,
    instant_answer: Arc<dyn DescriptionSource>,
}

impl ResolveFunctionUseCase {
    pub fn new(
        encyclopedia: Arc<dyn DescriptionSource>,
        instant_answer: Arc<dyn DescriptionSource>,
    ) -> Self {
        Self {
            encyclopedia,
            instant_answer,
        }
    }

    /// Resolver that never touches the network.
    pub fn offline() -> Self {
        Self::new(Arc::new(DisabledSource), Arc::new(DisabledSource))
    }

    /// Resolve the description for `tool_name`.
    pub async fn execute(&self, tool_name: &str) -> ResolvedDescription {
        let stages: [(&Arc<dyn DescriptionSource>, DescriptionOrigin); 2] = [
            (&self.encyclopedia, DescriptionOrigin::Encyclopedia),
            (&self.instant_answer, DescriptionOrigin::InstantAnswer),
        ];

        for (source, origin) in stages {
            match source.lookup(tool_name).await {
                LookupOutcome::Found(text) => {
                    debug!("{}: {} answered", tool_name, source.name());
                    return ResolvedDescription::new(text, origin);
                }
                LookupOutcome::NoData(reason) => {
                    debug!("{}: no data from {} ({})", tool_name, source.name(), reason);
                }
            }
        }

        debug!("{}: using fallback description", tool_name);
        ResolvedDescription::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracktools_domain::NoDataReason;

    // ==================== Test Mocks ====================

    struct MockSource {
        outcome: LookupOutcome,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn found(text: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: LookupOutcome::Found(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(reason: NoDataReason) -> Arc<Self> {
            Arc::new(Self {
                outcome: LookupOutcome::NoData(reason),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DescriptionSource for MockSource {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn lookup(&self, _tool_name: &str) -> LookupOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_encyclopedia_wins() {
        let wiki = MockSource::found("7-Zip is a free and open-source file archiver");
        let ddg = MockSource::found("should not be used");
        let resolver = ResolveFunctionUseCase::new(wiki.clone(), ddg.clone());

        let resolved = resolver.execute("7 Zip").await;

        assert_eq!(resolved.text, "7-Zip is a free and open-source file archiver");
        assert_eq!(resolved.origin, DescriptionOrigin::Encyclopedia);
        assert_eq!(wiki.calls(), 1);
        assert_eq!(ddg.calls(), 0);
    }

    #[tokio::test]
    async fn test_encyclopedia_wins_when_instant_answer_is_down() {
        let wiki = MockSource::found("Everything is a search engine");
        let ddg = MockSource::failing(NoDataReason::Transport("connection refused".into()));
        let resolver = ResolveFunctionUseCase::new(wiki, ddg);

        let resolved = resolver.execute("Everything").await;
        assert_eq!(resolved.text, "Everything is a search engine");
    }

    #[tokio::test]
    async fn test_falls_through_to_instant_answer() {
        let wiki = MockSource::failing(NoDataReason::HttpStatus(404));
        let ddg = MockSource::found("Snipaste is a screenshot tool");
        let resolver = ResolveFunctionUseCase::new(wiki.clone(), ddg.clone());

        let resolved = resolver.execute("Snipaste").await;

        assert_eq!(resolved.text, "Snipaste is a screenshot tool");
        assert_eq!(resolved.origin, DescriptionOrigin::InstantAnswer);
        assert_eq!(wiki.calls(), 1);
        assert_eq!(ddg.calls(), 1);
    }

    #[tokio::test]
    async fn test_fallback_when_both_fail() {
        let wiki = MockSource::failing(NoDataReason::Transport("timed out".into()));
        let ddg = MockSource::failing(NoDataReason::Decode("expected value".into()));
        let resolver = ResolveFunctionUseCase::new(wiki, ddg);

        let resolved = resolver.execute("Downkyi").await;

        assert_eq!(resolved.text, "Windows utility tool");
        assert!(resolved.is_fallback());
    }

    #[tokio::test]
    async fn test_fallback_on_empty_fields() {
        let wiki = MockSource::failing(NoDataReason::EmptyField("extract"));
        let ddg = MockSource::failing(NoDataReason::MissingField("AbstractText"));
        let resolver = ResolveFunctionUseCase::new(wiki, ddg);

        assert!(resolver.execute("Obscure").await.is_fallback());
    }

    #[tokio::test]
    async fn test_offline_resolver() {
        let resolved = ResolveFunctionUseCase::offline().execute("Anything").await;
        assert_eq!(resolved, ResolvedDescription::fallback());
    }
}
