//! Data models for scraped search results.
//!
//! - [`ArticleRecord`]: one news item found on a search results page

use serde::{Deserialize, Serialize};

/// A single news item extracted from a site's search results page.
///
/// Records are built once per extraction pass and never mutated afterwards.
/// `link` is always non-empty; `headline` and `date` may be empty strings
/// when the page did not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article URL as it appears in the page (not resolved).
    pub link: String,
    /// The article headline, trimmed.
    pub headline: String,
    /// The publication date text as shown by the site, trimmed and cleaned.
    pub date: String,
}

impl ArticleRecord {
    pub fn new(
        link: impl Into<String>,
        headline: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            link: link.into(),
            headline: headline.into(),
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_three_keys() {
        let record = ArticleRecord::new("/x", "", "");
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["link"], "/x");
        assert_eq!(obj["headline"], "");
        assert_eq!(obj["date"], "");
    }
}
