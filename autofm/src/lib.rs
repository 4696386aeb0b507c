// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use anyhow::{Context as _, Result};
use log::info;
use std::env;
use std::fs;

pub use crate::cli::Args;
pub use crate::config::{ExportConfig, builtin_defaults, load_default_frontmatter};
pub use crate::core::exporter::{
    ExportOutcome, export_document, export_documents, export_documents_to,
};
pub use crate::core::ignore::{IgnoreList, load_ignore_list};
pub use crate::core::selector::{DOCUMENT_EXTENSION, find_documents, select_documents};
pub use crate::models::{Document, DocumentPath, ExportStats, Frontmatter, Publish};
pub use crate::utils::{render_document, split_frontmatter};

/// Runs an export with paths resolved against the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or the
/// export fails.
#[inline]
pub fn run(args: &Args) -> Result<ExportStats> {
    let base_dir = env::current_dir().context("Failed to determine the current directory")?;
    let config = ExportConfig::from_args(args, &base_dir)?;
    export(&config)
}

/// Creates the output root, selects the documents and exports them.
///
/// # Errors
///
/// This function may return an error if:
/// * The output root cannot be created
/// * The root cannot be scanned
/// * Any document cannot be read, parsed or written
#[inline]
pub fn export(config: &ExportConfig) -> Result<ExportStats> {
    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;

    let documents = select_documents(
        &config.root,
        &config.base_dir,
        &config.ignore,
        Some(config.output.as_path()),
    )?;
    info!(
        "Selected {} document(s) under {}",
        documents.len(),
        config.root.display()
    );

    let stats = export_documents(&documents, config)?;
    info!(
        "Exported {} of {} document(s), skipped {}",
        stats.exported, stats.selected, stats.skipped
    );
    Ok(stats)
}
