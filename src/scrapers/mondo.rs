//! Mondo search results scraper.
//!
//! Hits on `https://mondo.rs/search/1/1` are `article.news-wrapper`
//! elements. The link lives on an `a.title-wrapper`, the headline in
//! `h2.title` and the date in `p.time`. The date text carries a `"|\n"`
//! separator between date and time that is stripped after trimming.

use super::{SiteScraper, compile, first_href, selection_text};
use crate::error::NewsError;
use crate::models::ArticleRecord;
use crate::utils::strip_pattern;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Selectors, date cleanup and search URL for mondo.rs.
#[derive(Debug, Clone)]
pub struct MondoConfig {
    /// Search URL up to and including `q=`.
    pub search_url_prefix: String,
    pub container: String,
    pub anchor: String,
    pub headline: String,
    pub date: String,
    /// Literal removed from the trimmed date text.
    pub date_noise: String,
}

impl Default for MondoConfig {
    fn default() -> Self {
        Self {
            search_url_prefix: "https://mondo.rs/search/1/1?q=".to_string(),
            container: "article.news-wrapper".to_string(),
            anchor: "a.title-wrapper".to_string(),
            headline: "h2.title".to_string(),
            date: "p.time".to_string(),
            date_noise: "|\n".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Mondo {
    search_url_prefix: String,
    container: Selector,
    anchor: Selector,
    headline: Selector,
    date: Selector,
    date_noise: String,
}

impl Mondo {
    /// Build a scraper from `config`, compiling its selectors.
    pub fn new(config: MondoConfig) -> Result<Self, NewsError> {
        Ok(Self {
            container: compile(&config.container)?,
            anchor: compile(&config.anchor)?,
            headline: compile(&config.headline)?,
            date: compile(&config.date)?,
            search_url_prefix: config.search_url_prefix,
            date_noise: config.date_noise,
        })
    }
}

impl SiteScraper for Mondo {
    fn name(&self) -> &str {
        "mondo"
    }

    fn search_url(&self, encoded_phrase: &str) -> String {
        format!("{}{}", self.search_url_prefix, encoded_phrase)
    }

    #[instrument(level = "info", skip_all, fields(site = "mondo"))]
    fn extract(&self, document: &Html) -> Vec<ArticleRecord> {
        let mut records = Vec::new();
        let mut containers = 0usize;

        for item in document.select(&self.container) {
            containers += 1;
            let Some(link) = first_href(item, &self.anchor) else {
                debug!(index = containers - 1, "Skipping item without title link");
                continue;
            };
            let date = strip_pattern(&selection_text(item, &self.date), &self.date_noise);
            records.push(ArticleRecord::new(
                link,
                selection_text(item, &self.headline),
                date,
            ));
        }

        info!(containers, count = records.len(), "Extracted Mondo articles");
        records
    }
}
