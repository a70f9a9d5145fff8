//! Lookup outcome value objects

/// Description used when no source has anything to say about a tool.
pub const FALLBACK_DESCRIPTION: &str = "Windows utility tool";

/// Why a lookup produced no description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoDataReason {
    /// Connection error, timeout, TLS failure, ...
    Transport(String),
    /// The service answered with something other than 200 OK
    HttpStatus(u16),
    /// The body was not the JSON we expected
    Decode(String),
    /// The expected field was absent (or not a string)
    MissingField(&'static str),
    /// The expected field was present but empty
    EmptyField(&'static str),
    /// The source was not consulted (offline mode)
    Disabled,
}

impl std::fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoDataReason::Transport(msg) => write!(f, "request failed: {}", msg),
            NoDataReason::HttpStatus(code) => write!(f, "HTTP status {}", code),
            NoDataReason::Decode(msg) => write!(f, "invalid response body: {}", msg),
            NoDataReason::MissingField(field) => write!(f, "field `{}` missing", field),
            NoDataReason::EmptyField(field) => write!(f, "field `{}` empty", field),
            NoDataReason::Disabled => write!(f, "lookup disabled"),
        }
    }
}

/// Result of a single best-effort lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The source returned a description (already cut to its first sentence)
    Found(String),
    /// The source had nothing usable
    NoData(NoDataReason),
}

impl LookupOutcome {
    /// Build an outcome from an optional JSON string field.
    ///
    /// Absent → [`MissingField`](NoDataReason::MissingField), empty →
    /// [`EmptyField`](NoDataReason::EmptyField), otherwise the text before
    /// the first period.
    pub fn from_field(field: &'static str, value: Option<&str>) -> Self {
        match value {
            None => LookupOutcome::NoData(NoDataReason::MissingField(field)),
            Some("") => LookupOutcome::NoData(NoDataReason::EmptyField(field)),
            Some(text) => LookupOutcome::Found(first_sentence(text).to_string()),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Which stage of the resolver produced a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionOrigin {
    /// Encyclopedia summary (Wikipedia)
    Encyclopedia,
    /// Instant-answer abstract (DuckDuckGo)
    InstantAnswer,
    /// [`FALLBACK_DESCRIPTION`]
    Fallback,
}

impl DescriptionOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionOrigin::Encyclopedia => "encyclopedia",
            DescriptionOrigin::InstantAnswer => "instant-answer",
            DescriptionOrigin::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for DescriptionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A description together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDescription {
    pub text: String,
    pub origin: DescriptionOrigin,
}

impl ResolvedDescription {
    pub fn new(text: impl Into<String>, origin: DescriptionOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_DESCRIPTION, DescriptionOrigin::Fallback)
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DescriptionOrigin::Fallback
    }
}

/// Text up to (not including) the first `.`; the whole text if there is none.
pub fn first_sentence(text: &str) -> &str {
    match text.find('.') {
        Some(idx) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence() {
        assert_eq!(
            first_sentence("7-Zip is a free file archiver. It was released in 1999."),
            "7-Zip is a free file archiver"
        );
        assert_eq!(first_sentence("No period here"), "No period here");
        assert_eq!(first_sentence(".leading"), "");
    }

    #[test]
    fn test_from_field() {
        assert_eq!(
            LookupOutcome::from_field("extract", Some("Everything is a search tool. More.")),
            LookupOutcome::Found("Everything is a search tool".to_string())
        );
        assert_eq!(
            LookupOutcome::from_field("extract", Some("")),
            LookupOutcome::NoData(NoDataReason::EmptyField("extract"))
        );
        assert_eq!(
            LookupOutcome::from_field("AbstractText", None),
            LookupOutcome::NoData(NoDataReason::MissingField("AbstractText"))
        );
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(NoDataReason::HttpStatus(404).to_string(), "HTTP status 404");
        assert_eq!(
            NoDataReason::MissingField("extract").to_string(),
            "field `extract` missing"
        );
    }

    #[test]
    fn test_fallback_description() {
        let resolved = ResolvedDescription::fallback();
        assert_eq!(resolved.text, "Windows utility tool");
        assert!(resolved.is_fallback());
    }
}
