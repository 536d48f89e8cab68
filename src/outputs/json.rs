//! JSON output of the combined result set.
//!
//! The whole sequence is serialized as one JSON array of objects with
//! 4-space indentation and written over the target path in a single
//! write. There is no temp-file-and-rename step, so a crash mid-write can
//! leave a truncated file.

use crate::error::NewsError;
use crate::models::ArticleRecord;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `records` as a JSON array indented with four spaces.
///
/// An empty slice becomes `[]`.
pub fn to_pretty_json(records: &[ArticleRecord]) -> Result<Vec<u8>, NewsError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `records` to `path`, replacing any existing file.
///
/// # Errors
///
/// [`NewsError::Serialize`] if serialization fails, [`NewsError::Write`]
/// if the file cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = records.len()))]
pub async fn write_news_items(records: &[ArticleRecord], path: &Path) -> Result<(), NewsError> {
    let json = to_pretty_json(records)?;

    fs::write(path, &json).await.map_err(|source| NewsError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(bytes = json.len(), "Wrote news items");

    Ok(())
}
