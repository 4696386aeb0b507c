// src/core/selector/utils.rs
use std::path::Path;

/// Extension of the documents the selector picks up.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Determines if the walk should skip an entry entirely.
///
/// The walk root itself is never skipped. Below it, `skip_dir` (usually the
/// output root when it sits inside the scanned tree) is not descended into.
pub fn should_skip(entry: &walkdir::DirEntry, skip_dir: Option<&Path>) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    skip_dir.is_some_and(|dir| entry.file_type().is_dir() && entry.path() == dir)
}

/// Returns `true` for a regular file carrying the document extension.
pub fn is_document(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext == DOCUMENT_EXTENSION)
}
