// src/models.rs
pub mod document;
pub mod export_stats;
pub mod frontmatter;
pub mod publish;

pub use document::{Document, DocumentPath};
pub use export_stats::ExportStats;
pub use frontmatter::{Frontmatter, PUBLISH_KEY};
pub use publish::Publish;
