//! # News Search
//!
//! Searches two Serbian news sites for a phrase, extracts the headline,
//! link and date of every hit, and saves the combined list as JSON.
//!
//! ## Usage
//!
//! ```sh
//! news_search novi sad
//! ```
//!
//! ## Pipeline
//!
//! 1. **Phrase**: join the CLI terms with spaces and percent-encode them
//! 2. **Fetch**: GET each site's search page, one site after the other
//! 3. **Extract**: run the site's scraper over the parsed page
//! 4. **Combine**: concatenate the per-site results in site order
//! 5. **Persist**: write the combined array to `./combined_news_items.json`
//!
//! Any failure aborts the run with a non-zero exit and no output file.

use clap::{CommandFactory, Parser};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::{Cli, DEFAULT_OUTPUT};
use error::NewsError;
use fetch::{encode_phrase, fetch_document, search_phrase};
use models::ArticleRecord;
use outputs::json;
use scrapers::SiteScraper;

/// How a successful invocation ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// No search terms were given; nothing was fetched or written.
    Usage,
    /// This many records were written to the output file.
    Saved(usize),
}

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    let output = Path::new(DEFAULT_OUTPUT);

    match execute(&args.terms, output).await {
        Ok(Outcome::Usage) => {
            println!("{}", Cli::command().render_usage());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Saved(count)) => {
            println!("News items have been saved to {}", output.display());
            let elapsed = start_time.elapsed();
            info!(
                count,
                ?elapsed,
                secs = elapsed.as_secs(),
                millis = elapsed.subsec_millis(),
                "Execution complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(stage = e.stage(), error = %e, "Run aborted");
            ExitCode::FAILURE
        }
    }
}

/// Turn the CLI terms into a search and save the results to `output`.
///
/// With no terms this returns [`Outcome::Usage`] before touching the
/// network or the filesystem.
async fn execute(terms: &[String], output: &Path) -> Result<Outcome, NewsError> {
    let Some(phrase) = search_phrase(terms) else {
        return Ok(Outcome::Usage);
    };
    info!(%phrase, output = %output.display(), "news_search starting up");

    let scrapers = scrapers::default_scrapers()?;
    run(&scrapers, &phrase, output).await.map(Outcome::Saved)
}

/// Fetch, extract, combine and persist. Returns the number of records written.
#[instrument(level = "info", skip_all)]
async fn run(
    scrapers: &[Box<dyn SiteScraper>],
    phrase: &str,
    output: &Path,
) -> Result<usize, NewsError> {
    let per_site = search_all(scrapers, &encode_phrase(phrase)).await?;

    let combined = aggregate::combine_all(per_site);
    info!(count = combined.len(), "Combined news items");

    json::write_news_items(&combined, output).await?;
    Ok(combined.len())
}

/// Search every site in order; the first failure stops the remaining fetches.
async fn search_all(
    scrapers: &[Box<dyn SiteScraper>],
    encoded_phrase: &str,
) -> Result<Vec<Vec<ArticleRecord>>, NewsError> {
    stream::iter(scrapers)
        .then(|scraper| {
            let url = scraper.search_url(encoded_phrase);
            async move {
                info!(site = scraper.name(), %url, "Searching site");
                let document = fetch_document(&url).await?;
                Ok::<_, NewsError>(scraper.extract(&document))
            }
        })
        .try_collect()
        .await
}
