//! Batch fetch-and-archive.
//!
//! Fetches every image in sequence order, collects a per-item outcome, folds
//! the successes into an in-memory zip, and leaves saving to the caller. One
//! failed item never aborts the batch; an all-failure batch still produces a
//! valid, empty archive.

use anyhow::{Context, Result};
use scraper::ElementRef;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::fetch;
use crate::page::Page;
use crate::resolve;
use crate::url_model;

/// Diagnostic for one image that contributed no archive entry.
#[derive(Debug)]
pub struct FailedItem {
    /// Resolved URL, when resolution itself succeeded.
    pub url: Option<String>,
    pub reason: String,
}

/// Outcome summary of one batch job.
#[derive(Debug, Default)]
pub struct ArchiveReport {
    /// Number of image references attempted.
    pub attempted: usize,
    /// Number of successful fetches folded into the archive.
    pub archived: usize,
    /// Per-item diagnostics for everything else.
    pub failed: Vec<FailedItem>,
}

/// Fetches every image on the page, in sequence order, and returns the
/// finished zip blob plus a report.
///
/// Entry names are the sanitized final path segment of each resolved URL.
/// Two images resolving to the same entry name silently overwrite, last
/// write wins.
pub fn archive_images(
    page: &Page,
    images: &[ElementRef<'_>],
    user_agent: Option<&str>,
) -> Result<(Vec<u8>, ArchiveReport)> {
    let mut entries: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    let mut report = ArchiveReport {
        attempted: images.len(),
        ..ArchiveReport::default()
    };

    for img in images {
        let url = match resolve::full_size_url(*img, page.url()) {
            Some(url) => url,
            None => {
                tracing::warn!("skipping image with no usable source");
                report.failed.push(FailedItem {
                    url: None,
                    reason: "no usable source".to_string(),
                });
                continue;
            }
        };

        match fetch::fetch_bytes(&url, user_agent) {
            Ok(bytes) => {
                let name = url_model::entry_name_for_url(&url);
                tracing::debug!("archived {} as {} ({} bytes)", url, name, bytes.len());
                entries.insert(name, bytes);
                report.archived += 1;
            }
            Err(e) => {
                tracing::warn!("failed to fetch image {}: {}", url, e);
                report.failed.push(FailedItem {
                    url: Some(url),
                    reason: e.to_string(),
                });
            }
        }
    }

    let blob = build_zip(&entries)?;
    Ok((blob, report))
}

/// Packs named entries into a single zip blob. An empty map yields a valid,
/// empty archive.
fn build_zip(entries: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, bytes) in entries {
        writer
            .start_file(name.as_str(), options)
            .with_context(|| format!("add archive entry {name}"))?;
        writer
            .write_all(bytes)
            .with_context(|| format!("write archive entry {name}"))?;
    }
    let cursor = writer.finish().context("finalize archive")?;
    Ok(cursor.into_inner())
}

/// Writes the finished blob to disk under the suggested name.
pub fn save_archive(blob: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, blob).with_context(|| format!("write archive {}", path.display()))
}
