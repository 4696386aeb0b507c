// src/models/frontmatter.rs
use anyhow::{Context as _, Result};
use serde::Serialize;
use serde_yaml_ng::{Mapping, Value};

/// Key whose boolean `false` value keeps a document out of the export.
pub const PUBLISH_KEY: &str = "publish";

/// Front matter of a document: an ordered YAML mapping.
///
/// Key order is preserved, so a document rendered twice comes out the same.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    /// Parses a header block.
    ///
    /// An empty block, or one whose YAML is not a mapping, yields empty front
    /// matter.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not valid YAML.
    #[inline]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value =
            serde_yaml_ng::from_str(yaml).context("Failed to parse front matter")?;
        match value {
            Value::Mapping(mapping) => Ok(Self(mapping)),
            _ => Ok(Self::new()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if a value cannot be represented as YAML.
    #[inline]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to serialize front matter")
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets `key`, keeping its position if it is already present.
    #[inline]
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.keys()
    }

    /// Layers `own` over these defaults.
    ///
    /// Keeps every key `own` sets, in document order and with the document's
    /// value, then appends each default key the document lacks in default
    /// order. A document that already carries every default comes back
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn merged_with(&self, own: &Self) -> Self {
        let mut merged = own.clone();
        for (key, value) in &self.0 {
            if !merged.0.contains_key(key) {
                merged.0.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

impl From<Mapping> for Frontmatter {
    #[inline]
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}
