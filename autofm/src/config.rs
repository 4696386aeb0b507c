// src/config.rs
use crate::cli::Args;
use crate::core::ignore::{IgnoreList, load_ignore_list};
use crate::models::{Frontmatter, PUBLISH_KEY};
use crate::utils::absolute_path;
use anyhow::{Context as _, Result, bail};
use log::info;
use serde_yaml_ng::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const IGNORE_FILE_NAME: &str = ".export-ignore";
pub const DEFAULT_FRONT_MATTER_FILE_NAME: &str = "default_front_matter.yml";
pub const OUTPUT_DIR_NAME: &str = "output";
pub const DEFAULT_AUTHOR: &str = "Aadam";

/// Everything an export run needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory relative paths are expressed against
    pub base_dir: PathBuf,
    pub root: PathBuf,
    pub output: PathBuf,
    pub ignore: IgnoreList,
    pub defaults: Frontmatter,
}

impl ExportConfig {
    /// Resolves `args` against `base_dir` and loads the ignore list and the
    /// default front matter.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The ignore file exists but cannot be read or holds an invalid pattern
    /// * The default front matter file exists but is not a YAML mapping
    #[inline]
    pub fn from_args(args: &Args, base_dir: &Path) -> Result<Self> {
        let resolve = |arg: Option<&PathBuf>, default: &str| {
            arg.map_or_else(|| base_dir.join(default), |path| absolute_path(path, base_dir))
        };

        let root = args
            .path
            .as_deref()
            .map_or_else(|| base_dir.to_path_buf(), |path| absolute_path(path, base_dir));
        let ignore_path = resolve(args.ignore.as_ref(), IGNORE_FILE_NAME);
        let defaults_path = resolve(
            args.default_front_matter.as_ref(),
            DEFAULT_FRONT_MATTER_FILE_NAME,
        );
        let output = resolve(args.output.as_ref(), OUTPUT_DIR_NAME);

        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            root,
            output,
            ignore: load_ignore_list(&ignore_path)?,
            defaults: load_default_frontmatter(&defaults_path)?,
        })
    }
}

/// Built-in defaults used when no default front matter file exists.
#[inline]
#[must_use]
pub fn builtin_defaults() -> Frontmatter {
    let mut defaults = Frontmatter::new();
    defaults.insert(PUBLISH_KEY, false);
    defaults.insert("author", DEFAULT_AUTHOR);
    defaults
}

/// Loads the default front matter, falling back to [`builtin_defaults`]
/// when the file does not exist. An empty file means no defaults.
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read
/// * The file is not valid YAML
/// * The YAML is not a mapping, or has non-string keys
#[inline]
pub fn load_default_frontmatter(path: &Path) -> Result<Frontmatter> {
    if !path.exists() {
        info!(
            "No default front matter at {}, using built-in defaults",
            path.display()
        );
        return Ok(builtin_defaults());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read default front matter: {}", path.display()))?;
    let value: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse default front matter: {}", path.display()))?
    };

    match value {
        Value::Null => Ok(Frontmatter::new()),
        Value::Mapping(mapping) => {
            if let Some(key) = mapping.keys().find(|key| !key.is_string()) {
                bail!(
                    "Default front matter keys must be strings, found {key:?} in {}",
                    path.display()
                );
            }
            Ok(Frontmatter::from(mapping))
        }
        _ => bail!(
            "Default front matter must be a YAML mapping: {}",
            path.display()
        ),
    }
}
