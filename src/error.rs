//! Error type shared by every stage of the search pipeline.
//!
//! Each variant maps to one pipeline stage so the entry point can log a
//! short stage prefix before exiting. Nothing here is recovered from.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run.
#[derive(Debug, Error)]
pub enum NewsError {
    /// A search URL could not be parsed.
    #[error("invalid search URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request itself failed (DNS, connect, transport).
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read or decoded.
    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A site's CSS selector failed to compile.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// The result set could not be serialized to JSON.
    #[error("error marshalling JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("error writing JSON to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NewsError {
    /// Short label of the stage that failed, used as a log prefix.
    pub fn stage(&self) -> &'static str {
        match self {
            NewsError::InvalidUrl { .. } => "url",
            NewsError::Fetch { .. } => "fetch",
            NewsError::Body { .. } => "parse",
            NewsError::Selector { .. } => "config",
            NewsError::Serialize(_) => "serialize",
            NewsError::Write { .. } => "write",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_stage_labels() {
        let err = NewsError::Selector {
            selector: "h2 >".into(),
            reason: "dangling combinator".into(),
        };
        assert_eq!(err.stage(), "config");
        assert!(err.source().is_none());

        let err = NewsError::Write {
            path: PathBuf::from("/nope/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.stage(), "write");
        assert!(err.to_string().contains("/nope/out.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_url_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = NewsError::InvalidUrl {
            url: "not a url".into(),
            source,
        };
        assert_eq!(err.stage(), "url");
        assert!(err.to_string().starts_with("invalid search URL not a url"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_serde_json() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NewsError = e.into();
        assert_eq!(err.stage(), "serialize");
        assert!(err.source().is_some());
    }
}
