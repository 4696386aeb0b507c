// tests/integration_tests/selection_test.rs
use super::common::{config_for, create_ignore_file, setup_test_directory};
use anyhow::Result;
use autofm::{IgnoreList, find_documents, select_documents};
use std::path::PathBuf;

fn relative(documents: &[autofm::DocumentPath]) -> Vec<PathBuf> {
    documents.iter().map(|d| d.relative.clone()).collect()
}

#[test]
fn test_selection_with_ignore() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["drafts/*.md", "hidden.md"])?;

    let config = config_for(temp_dir.path())?;
    let documents = select_documents(
        &config.root,
        &config.base_dir,
        &config.ignore,
        Some(config.output.as_path()),
    )?;

    assert_eq!(
        relative(&documents),
        vec![
            PathBuf::from("authored.md"),
            PathBuf::from("notes/drafts-old.md"),
            PathBuf::from("plain.md"),
            PathBuf::from("published.md"),
        ]
    );
    Ok(())
}

#[test]
fn test_only_markdown_files_are_found() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let documents = find_documents(temp_dir.path(), temp_dir.path(), None)?;
    assert_eq!(documents.len(), 6, "readme.txt is not a document");
    assert!(
        documents
            .iter()
            .all(|d| d.relative.extension().is_some_and(|ext| ext == "md"))
    );
    Ok(())
}

#[test]
fn test_patterns_match_paths_relative_to_base() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let root = temp_dir.path().join("notes");

    let mut ignore = IgnoreList::new();
    ignore.add_pattern("drafts-old.md")?;
    let documents = select_documents(&root, temp_dir.path(), &ignore, None)?;
    assert_eq!(
        relative(&documents),
        vec![PathBuf::from("notes/drafts-old.md")],
        "The pattern is matched against notes/drafts-old.md"
    );

    let mut ignore = IgnoreList::new();
    ignore.add_pattern("notes/*")?;
    assert!(select_documents(&root, temp_dir.path(), &ignore, None)?.is_empty());
    Ok(())
}
