//! Search URL construction and page fetching.
//!
//! A fetch is a single GET with reqwest's defaults: no custom headers, no
//! timeout, no retry. The body is read in full and handed to `scraper`'s
//! lenient HTML parser.

use crate::error::NewsError;
use crate::utils::truncate_for_log;
use scraper::Html;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Join search terms with single spaces into one search phrase.
///
/// Returns `None` when there are no terms.
pub fn search_phrase<S: AsRef<str>>(terms: &[S]) -> Option<String> {
    if terms.is_empty() {
        return None;
    }
    Some(
        terms
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Percent-encode a search phrase for use as a query-string value.
///
/// Spaces become `%20` rather than the `+` of form encoding; both sites
/// decode either form to the same phrase.
pub fn encode_phrase(phrase: &str) -> String {
    urlencoding::encode(phrase).into_owned()
}

/// Fetch `url` and parse the response body as an HTML document.
///
/// # Errors
///
/// - [`NewsError::InvalidUrl`] if `url` is not well-formed
/// - [`NewsError::Fetch`] on any transport failure
/// - [`NewsError::Body`] if the body cannot be read
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_document(url: &str) -> Result<Html, NewsError> {
    let parsed = Url::parse(url).map_err(|source| NewsError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = reqwest::get(parsed).await.map_err(|source| NewsError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%status, "Search page returned non-success status; parsing body anyway");
    }

    // text() consumes the response, so the connection is released here
    let body = response.text().await.map_err(|source| NewsError::Body {
        url: url.to_string(),
        source,
    })?;

    info!(%status, bytes = body.len(), "Fetched search page");
    debug!(preview = %truncate_for_log(&body, 200), "Response body");

    Ok(Html::parse_document(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_phrase_joins_with_single_spaces() {
        let terms = vec!["novi", "sad", "most"];
        assert_eq!(search_phrase(&terms).as_deref(), Some("novi sad most"));
    }

    #[test]
    fn test_search_phrase_empty() {
        let terms: Vec<String> = Vec::new();
        assert_eq!(search_phrase(&terms), None);
    }

    #[test]
    fn test_encode_phrase() {
        assert_eq!(encode_phrase("novi sad"), "novi%20sad");
        assert_eq!(encode_phrase("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_phrase("Šabac"), "%C5%A0abac");
    }

    #[tokio::test]
    async fn test_fetch_document_rejects_malformed_url() {
        let err = fetch_document("not a url").await.unwrap_err();
        assert!(matches!(err, NewsError::InvalidUrl { .. }));
        assert_eq!(err.stage(), "url");
    }
}
