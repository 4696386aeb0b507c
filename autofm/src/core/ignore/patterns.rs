// src/core/ignore/patterns.rs
use crate::models::DocumentPath;
use anyhow::{Context as _, Result};
use glob::Pattern;
use log::debug;
use std::path::Path;

/// Ordered list of shell-glob ignore patterns.
///
/// Patterns are matched against the whole relative path string, so `*`
/// also crosses `/` and a pattern such as `c.md` only matches at the top
/// level.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<Pattern>,
}

impl IgnoreList {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds one line of an ignore file.
    ///
    /// Trailing whitespace is trimmed. Blank lines and lines starting with
    /// `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid glob pattern.
    #[inline]
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let pattern = line.trim_end();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let translated = to_glob(pattern);
        let compiled = Pattern::new(&translated)
            .with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
        self.patterns.push(compiled);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    /// Returns `true` if any pattern matches `path`.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let path_str = path.as_ref().to_string_lossy();
        self.patterns.iter().any(|pattern| pattern.matches(&path_str))
    }

    /// Removes every candidate whose relative path matches a pattern.
    ///
    /// Patterns are applied one after another; a removed candidate never
    /// comes back.
    #[inline]
    #[must_use]
    pub fn apply(&self, mut candidates: Vec<DocumentPath>) -> Vec<DocumentPath> {
        for pattern in &self.patterns {
            let before = candidates.len();
            candidates.retain(|candidate| !pattern.matches(&candidate.relative.to_string_lossy()));
            debug!(
                "Ignore pattern '{}' removed {} document(s)",
                pattern.as_str(),
                before.saturating_sub(candidates.len())
            );
        }
        candidates
    }
}

/// Rewrites an fnmatch pattern into one `glob::Pattern` accepts.
///
/// Runs of `*` collapse to one, since a single `*` already crosses `/`. A
/// `[` with no closing `]` matches itself.
fn to_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut glob = String::with_capacity(pattern.len());
    let mut i: usize = 0;

    while let Some(&c) = chars.get(i) {
        match c {
            '*' => {
                glob.push('*');
                while chars.get(i.saturating_add(1)) == Some(&'*') {
                    i = i.saturating_add(1);
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    glob.extend(chars.get(i..=end).unwrap_or_default());
                    i = end;
                }
                None => glob.push_str("[[]"),
            },
            _ => glob.push(c),
        }
        i = i.saturating_add(1);
    }

    glob
}

/// Index of the `]` closing the class opened at `start`. A leading `!` and a
/// `]` right after it (or right after the `[`) belong to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut from = start.saturating_add(1);
    if chars.get(from) == Some(&'!') {
        from = from.saturating_add(1);
    }
    if chars.get(from) == Some(&']') {
        from = from.saturating_add(1);
    }
    chars
        .iter()
        .skip(from)
        .position(|&c| c == ']')
        .map(|offset| offset.saturating_add(from))
}
