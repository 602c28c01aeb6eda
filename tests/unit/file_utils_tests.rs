/*!
 * Tests for file and directory utilities
 */

use anyhow::Result;
use srtlint::file_utils::FileManager;

use crate::common;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_fileExtension_shouldLowercase() {
    assert_eq!(
        FileManager::file_extension("Movie.SRT"),
        Some("srt".to_string())
    );
    assert_eq!(FileManager::file_extension("noext"), None);
}

#[test]
fn test_hasMatchingExtension_shouldBeCaseInsensitive() {
    let extensions = exts(&["srt", "txt"]);

    assert!(FileManager::has_matching_extension("a.srt", &extensions));
    assert!(FileManager::has_matching_extension("a.SRT", &extensions));
    assert!(FileManager::has_matching_extension("b.Txt", &extensions));
    assert!(!FileManager::has_matching_extension("c.sub", &extensions));
    assert!(!FileManager::has_matching_extension("noext", &extensions));
}

#[test]
fn test_findFiles_shouldFindNestedMatchesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();

    common::create_test_file(root, "a.srt", "x")?;
    common::create_test_file(root, "b.json", "x")?;
    std::fs::create_dir(root.join("nested"))?;
    common::create_test_file(&root.join("nested"), "c.txt", "x")?;

    let found = FileManager::find_files(root, &exts(&["srt", "txt"]))?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("a.srt")));
    assert!(found.iter().any(|p| p.ends_with("c.txt")));
    Ok(())
}

#[test]
fn test_findFiles_withEmptyDir_shouldReturnEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let found = FileManager::find_files(temp_dir.path(), &exts(&["srt"]))?;

    assert!(found.is_empty());
    Ok(())
}

#[test]
fn test_readToString_withExistingFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "a.srt", "hello")?;

    assert_eq!(FileManager::read_to_string(&path)?, "hello");
    Ok(())
}

#[test]
fn test_readToString_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let result = FileManager::read_to_string(temp_dir.path().join("missing.srt"));

    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_existenceChecks_shouldDistinguishFilesAndDirs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.srt", "x")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    Ok(())
}
