// src/core/ignore/loader.rs
use crate::core::ignore::IgnoreList;
use anyhow::{Context as _, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Loads ignore patterns from a newline-delimited file.
///
/// A missing file yields an empty list.
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read
/// * A line contains invalid pattern syntax
#[inline]
pub fn load_ignore_list(path: &Path) -> Result<IgnoreList> {
    let mut patterns = IgnoreList::new();

    if !path.exists() {
        info!("No ignore file at {}, nothing is ignored", path.display());
        return Ok(patterns);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    for line in content.lines() {
        patterns.add_pattern(line)?;
    }

    Ok(patterns)
}
