//! Blic search results scraper.
//!
//! Each hit on `https://www.blic.rs/search` is a `.news__content` block
//! whose `h2 a` anchor carries both the link and the headline, with the
//! publication date in a `<time>` element.

use super::{SiteScraper, compile, first_href, selection_text};
use crate::error::NewsError;
use crate::models::ArticleRecord;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Selectors and search URL for blic.rs.
#[derive(Debug, Clone)]
pub struct BlicConfig {
    /// Search URL up to and including `q=`.
    pub search_url_prefix: String,
    /// One element per news item.
    pub container: String,
    /// Anchor holding the link; its text is the headline.
    pub anchor: String,
    /// Element holding the publication date.
    pub date: String,
}

impl Default for BlicConfig {
    fn default() -> Self {
        Self {
            search_url_prefix: "https://www.blic.rs/search?q=".to_string(),
            container: ".news__content".to_string(),
            anchor: "h2 a".to_string(),
            date: "time".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Blic {
    search_url_prefix: String,
    container: Selector,
    anchor: Selector,
    date: Selector,
}

impl Blic {
    /// Build a scraper from `config`, compiling its selectors.
    pub fn new(config: BlicConfig) -> Result<Self, NewsError> {
        Ok(Self {
            container: compile(&config.container)?,
            anchor: compile(&config.anchor)?,
            date: compile(&config.date)?,
            search_url_prefix: config.search_url_prefix,
        })
    }
}

impl SiteScraper for Blic {
    fn name(&self) -> &str {
        "blic"
    }

    fn search_url(&self, encoded_phrase: &str) -> String {
        format!("{}{}", self.search_url_prefix, encoded_phrase)
    }

    #[instrument(level = "info", skip_all, fields(site = "blic"))]
    fn extract(&self, document: &Html) -> Vec<ArticleRecord> {
        let mut records = Vec::new();
        let mut containers = 0usize;

        for item in document.select(&self.container) {
            containers += 1;
            let Some(link) = first_href(item, &self.anchor) else {
                debug!(index = containers - 1, "Skipping item without link");
                continue;
            };
            records.push(ArticleRecord::new(
                link,
                selection_text(item, &self.anchor),
                selection_text(item, &self.date),
            ));
        }

        info!(containers, count = records.len(), "Extracted Blic articles");
        records
    }
}
