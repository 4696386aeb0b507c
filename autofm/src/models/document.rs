// src/models/document.rs
use crate::models::frontmatter::Frontmatter;
use crate::models::publish::Publish;
use crate::utils::{render_document, split_frontmatter};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A selected document: where it is read from and where it lands under the
/// output root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    pub source: PathBuf,
    pub relative: PathBuf,
}

impl DocumentPath {
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            relative: relative.into(),
        }
    }
}

/// A parsed document: its own front matter and its body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    /// Parses document text into front matter and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is present but is not valid YAML.
    #[inline]
    pub fn parse(content: &str) -> Result<Self> {
        let (header, body) = split_frontmatter(content);
        let frontmatter = header.map_or_else(|| Ok(Frontmatter::new()), Frontmatter::from_yaml)?;
        Ok(Self {
            frontmatter,
            body: body.to_owned(),
        })
    }

    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text or its
    /// header is malformed.
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse document: {}", path.display()))
    }

    #[inline]
    #[must_use]
    pub fn publish(&self, defaults: &Frontmatter) -> Publish {
        Publish::resolve(&self.frontmatter, defaults)
    }

    /// Returns a copy with every missing default key filled in.
    #[inline]
    #[must_use]
    pub fn with_defaults(&self, defaults: &Frontmatter) -> Self {
        Self {
            frontmatter: defaults.merged_with(&self.frontmatter),
            body: self.body.clone(),
        }
    }

    /// Renders the document. Empty front matter renders as an empty
    /// `---`/`---` block.
    ///
    /// # Errors
    ///
    /// Returns an error if the front matter cannot be serialized.
    #[inline]
    pub fn render(&self) -> Result<String> {
        let header = if self.frontmatter.is_empty() {
            String::new()
        } else {
            self.frontmatter.to_yaml()?
        };
        Ok(render_document(&header, &self.body))
    }
}
