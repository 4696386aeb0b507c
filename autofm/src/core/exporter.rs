// src/core/exporter.rs
use crate::config::ExportConfig;
use crate::models::{Document, DocumentPath, ExportStats, Publish};
use anyhow::{Context as _, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

const PROGRESS_TEMPLATE: &str = "{bar:40} {pos}/{len} {wide_msg}";

/// What happened to a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Written to this path under the output root.
    Written(PathBuf),
    /// Not written because the document is withheld from publishing.
    Skipped(Publish),
}

/// Exports one document.
///
/// A withheld document is left alone. Otherwise the defaults are merged under
/// its own front matter and the result is written to the same relative path
/// under the output root, replacing any file already there.
///
/// # Errors
///
/// This function may return an error if:
/// * The document cannot be read or its header is malformed
/// * The destination directory or file cannot be written
#[inline]
pub fn export_document(document: &DocumentPath, config: &ExportConfig) -> Result<ExportOutcome> {
    let parsed = Document::load(&document.source)?;

    let publish = parsed.publish(&config.defaults);
    if publish.is_withheld() {
        return Ok(ExportOutcome::Skipped(publish));
    }

    let rendered = parsed
        .with_defaults(&config.defaults)
        .render()
        .with_context(|| format!("Failed to render {}", document.source.display()))?;

    let destination = config.output.join(&document.relative);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&destination, rendered)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    Ok(ExportOutcome::Written(destination))
}

/// Exports the selected documents in order, showing a progress bar and
/// printing a skip notice to stdout for every withheld document.
///
/// The first failure aborts the run; files written before it stay in place.
///
/// # Errors
///
/// Returns the first error from [`export_document`].
#[inline]
pub fn export_documents(documents: &[DocumentPath], config: &ExportConfig) -> Result<ExportStats> {
    export_documents_to(documents, config, &mut io::stdout().lock())
}

/// Same as [`export_documents`], writing skip notices to `notices`.
///
/// Notices are written with the bar suspended, so they appear whether or not
/// the bar is drawn.
///
/// # Errors
///
/// Returns the first error from [`export_document`], or an error if a
/// notice cannot be written.
#[inline]
pub fn export_documents_to<W: Write>(
    documents: &[DocumentPath],
    config: &ExportConfig,
    notices: &mut W,
) -> Result<ExportStats> {
    let total = u64::try_from(documents.len()).unwrap_or(u64::MAX);
    let mut stats = ExportStats::new(total);

    let progress = ProgressBar::new(total);
    progress.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?);

    for document in documents {
        progress.set_message(document.relative.display().to_string());

        match export_document(document, config)? {
            ExportOutcome::Written(destination) => {
                debug!("Wrote {}", destination.display());
                stats.record_exported();
            }
            ExportOutcome::Skipped(publish) => {
                progress
                    .suspend(|| writeln!(notices, "Skipped {}", document.relative.display()))
                    .context("Failed to write skip notice")?;
                debug!("Skipped {} ({publish})", document.relative.display());
                stats.record_skipped();
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(stats)
}
