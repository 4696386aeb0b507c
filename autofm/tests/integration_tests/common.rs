// tests/integration_tests/common.rs
use anyhow::Result;
use autofm::{Args, ExportConfig};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, ".export-ignore", &content)
}

pub fn create_default_front_matter(dir: &Path, yaml: &str) -> Result<()> {
    create_test_file(dir, "default_front_matter.yml", yaml)
}

/// Config resolved the way the binary resolves it, with `dir` standing in
/// for the working directory.
pub fn config_for(dir: &Path) -> Result<ExportConfig> {
    ExportConfig::from_args(&Args::default(), dir)
}

/// Relative paths of every file under `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().strip_prefix(dir)?.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "plain.md", "# Plain\nNo header at all.")?;

    create_test_file(
        temp_dir.path(),
        "published.md",
        "---\npublish: true\n---\n# Published\nReady to go.",
    )?;

    create_test_file(
        temp_dir.path(),
        "hidden.md",
        "---\npublish: false\ntitle: Hidden\n---\n# Hidden\nNot for sharing.",
    )?;

    create_test_file(
        temp_dir.path(),
        "authored.md",
        "---\npublish: true\nauthor: Bob\n---\nWritten by Bob.",
    )?;

    create_test_file(
        temp_dir.path(),
        "drafts/x.md",
        "---\npublish: true\n---\nDraft.",
    )?;

    create_test_file(
        temp_dir.path(),
        "notes/drafts-old.md",
        "---\npublish: true\n---\nOld notes.",
    )?;

    create_test_file(temp_dir.path(), "notes/readme.txt", "Not markdown")?;

    Ok(temp_dir)
}
