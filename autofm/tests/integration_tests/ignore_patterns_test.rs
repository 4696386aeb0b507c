// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, setup_test_directory};
use anyhow::Result;
use autofm::load_ignore_list;

#[test]
fn test_ignore_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_ignore_file(
        temp_dir.path(),
        &[
            "# Comment line",
            "drafts/*.md",
            "*.tmp.md",
            "archive/**",
            "journal/202[0-3]-*.md",
            "",
            "hidden.md   ",
        ],
    )?;

    let patterns = load_ignore_list(&temp_dir.path().join(".export-ignore"))?;

    assert_eq!(patterns.len(), 5);
    assert!(patterns.matches("drafts/x.md"), "Should match path pattern");
    assert!(
        !patterns.matches("notes/drafts-old.md"),
        "Path patterns are not basename patterns"
    );
    assert!(
        patterns.matches("deep/nested/scratch.tmp.md"),
        "A leading star crosses directories"
    );
    assert!(patterns.matches("archive/2019/old.md"));
    assert!(patterns.matches("journal/2021-05.md"));
    assert!(!patterns.matches("journal/2024-05.md"));
    assert!(
        patterns.matches("hidden.md"),
        "Trailing whitespace is trimmed"
    );
    assert!(
        !patterns.matches("sub/hidden.md"),
        "Bare names only match at the top level"
    );

    Ok(())
}

#[test]
fn test_missing_ignore_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let patterns = load_ignore_list(&temp_dir.path().join(".export-ignore"))?;
    assert!(patterns.is_empty());
    Ok(())
}
