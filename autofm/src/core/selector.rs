// src/core/selector.rs
mod utils;


pub use utils::DOCUMENT_EXTENSION;

use crate::core::ignore::IgnoreList;
use crate::models::DocumentPath;
use crate::utils::relative_path;
use anyhow::{Context as _, Result};
use std::path::Path;
use utils::{is_document, should_skip};
use walkdir::WalkDir;

/// Finds every document under `root`, before any ignore pattern applies.
///
/// Relative paths are expressed against `base`, or against `root` when the
/// root lies outside `base`. The walk follows symlinks and is sorted by file
/// name.
///
/// # Arguments
///
/// * `root` - Absolute directory to scan
/// * `base` - Absolute directory the relative paths are expressed against
/// * `skip_dir` - Directory never descended into, usually the output root
///
/// # Errors
///
/// This function may return an error if:
/// * The root does not exist or cannot be read
/// * File system operations fail during traversal
#[inline]
pub fn find_documents(
    root: &Path,
    base: &Path,
    skip_dir: Option<&Path>,
) -> Result<Vec<DocumentPath>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip(e, skip_dir))
    {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if !is_document(&entry) {
            continue;
        }

        let source = entry.into_path();
        let relative = relative_path(&source, base, root);
        documents.push(DocumentPath { source, relative });
    }

    Ok(documents)
}

/// Selects the documents to export: every document under `root` whose
/// relative path matches none of the ignore patterns, in walk order.
///
/// # Errors
///
/// Returns an error if the directory walk fails.
#[inline]
pub fn select_documents(
    root: &Path,
    base: &Path,
    ignore: &IgnoreList,
    skip_dir: Option<&Path>,
) -> Result<Vec<DocumentPath>> {
    let candidates = find_documents(root, base, skip_dir)?;
    Ok(ignore.apply(candidates))
}
