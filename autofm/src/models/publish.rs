// src/models/publish.rs
use crate::models::frontmatter::{Frontmatter, PUBLISH_KEY};
use serde_yaml_ng::Value;
use std::fmt;

/// Whether a document may be exported, and why not when it may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publish {
    /// The document itself sets `publish: false`.
    Withheld,
    /// The document has no `publish` key and the defaults set it to `false`.
    WithheldByDefault,
    /// Anything else, including non-boolean `publish` values.
    Allowed,
}

impl Publish {
    /// Resolves the flag from a document's own front matter and the defaults.
    ///
    /// Only a boolean `false` withholds a document. A document that sets the
    /// key decides on its own; the defaults only apply when it is absent.
    #[inline]
    #[must_use]
    pub fn resolve(own: &Frontmatter, defaults: &Frontmatter) -> Self {
        match own.get(PUBLISH_KEY) {
            Some(Value::Bool(false)) => Self::Withheld,
            Some(_) => Self::Allowed,
            None => match defaults.get(PUBLISH_KEY) {
                Some(Value::Bool(false)) => Self::WithheldByDefault,
                _ => Self::Allowed,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_withheld(self) -> bool {
        matches!(self, Self::Withheld | Self::WithheldByDefault)
    }
}

impl fmt::Display for Publish {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Withheld => f.write_str("publish: false"),
            Self::WithheldByDefault => f.write_str("publish: false by default"),
            Self::Allowed => f.write_str("publishable"),
        }
    }
}
