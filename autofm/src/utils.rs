// src/utils.rs
use std::path::{Path, PathBuf};

/// A header delimiter is a line of three or more dashes, optionally followed
/// by trailing whitespace.
fn is_delimiter(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Splits a document into its raw header YAML and its body.
///
/// The whole text is trimmed before looking for the header. A header is only
/// recognised when the first line is a delimiter and a closing delimiter
/// follows it; otherwise there is no header and the trimmed text is the body.
///
/// The returned body is trimmed as well.
#[inline]
#[must_use]
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let text = content.trim();
    let Some((first_line, rest)) = text.split_once('\n') else {
        return (None, text);
    };
    if !is_delimiter(first_line) {
        return (None, text);
    }

    let mut offset: usize = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            let header = rest.get(..offset).unwrap_or_default();
            let body = rest
                .get(offset.saturating_add(line.len())..)
                .unwrap_or_default();
            return (Some(header), body.trim());
        }
        offset = offset.saturating_add(line.len());
    }

    (None, text)
}

/// Renders a header and body back into document text.
///
/// Layout is `---`, the header, `---`, a blank line, the body and a final
/// newline. An empty body drops the blank line; an empty header leaves the
/// two delimiters back to back.
#[inline]
#[must_use]
pub fn render_document(header_yaml: &str, body: &str) -> String {
    let header = header_yaml.trim_end();
    let block = if header.is_empty() {
        String::from("---\n---\n")
    } else {
        format!("---\n{header}\n---\n")
    };
    if body.is_empty() {
        block
    } else {
        format!("{block}\n{body}\n")
    }
}

/// Resolves `path` against `base` unless it is already absolute.
#[inline]
#[must_use]
pub fn absolute_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Expresses `path` relative to `base`, falling back to `root` when the path
/// does not live under `base`.
#[inline]
#[must_use]
pub fn relative_path(path: &Path, base: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(base)
        .or_else(|_| path.strip_prefix(root))
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
