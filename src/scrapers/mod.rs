//! Site scrapers that turn a search results page into article records.
//!
//! Every site implements [`SiteScraper`]. The sites differ only in their
//! selectors and text cleanup; they share the output shape and the skip
//! policy: a container without a usable link anchor yields no record,
//! while a missing headline or date just leaves that field empty.
//!
//! # Supported Sources
//!
//! | Source | Module | Search URL |
//! |--------|--------|------------|
//! | Blic | [`blic`] | `https://www.blic.rs/search?q=…` |
//! | Mondo | [`mondo`] | `https://mondo.rs/search/1/1?q=…` |
//!
//! Adding a source means one new module implementing [`SiteScraper`] and
//! one entry in [`default_scrapers`].

use crate::error::NewsError;
use crate::models::ArticleRecord;
use scraper::{ElementRef, Html, Selector};

pub mod blic;
pub mod mondo;

/// Extract article records from one site's search results page.
pub trait SiteScraper {
    /// Short name of the site, used in logs.
    fn name(&self) -> &str;

    /// Absolute search URL for an already percent-encoded phrase.
    fn search_url(&self, encoded_phrase: &str) -> String;

    /// Extract records in document order.
    fn extract(&self, document: &Html) -> Vec<ArticleRecord>;
}

/// All configured sites, in output order.
pub fn default_scrapers() -> Result<Vec<Box<dyn SiteScraper>>, NewsError> {
    let scrapers: Vec<Box<dyn SiteScraper>> = vec![
        Box::new(blic::Blic::new(blic::BlicConfig::default())?),
        Box::new(mondo::Mondo::new(mondo::MondoConfig::default())?),
    ];
    Ok(scrapers)
}

/// Compile a CSS selector, keeping the offending string in the error.
pub(crate) fn compile(selector: &str) -> Result<Selector, NewsError> {
    Selector::parse(selector).map_err(|e| NewsError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Trimmed `href` of the first element matching `selector` under `scope`.
///
/// `None` when nothing matches, the first match has no `href`, or the
/// `href` is blank.
pub(crate) fn first_href(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let href = scope.select(selector).next()?.value().attr("href")?;
    let href = href.trim();
    (!href.is_empty()).then(|| href.to_string())
}

/// Combined text of every element matching `selector` under `scope`, trimmed.
///
/// Empty when nothing matches.
pub(crate) fn selection_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    let text: String = scope
        .select(selector)
        .flat_map(|element| element.text())
        .collect();
    text.trim().to_string()
}
