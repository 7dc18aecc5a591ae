//! Shared fixtures for the cross-crate tests

use std::fs;
use std::path::{Path, PathBuf};

/// A changelog in the usual shape: free-form header, an unreleased version,
/// two releases and a link table
pub const SAMPLE_CHANGELOG: &str = "# Changelog

All notable changes to this project will be documented in this file.

## Unreleased

### Added

- Reference links in version headings

## [1.1.0] - 2023-04-02

### Fixed

- Dates on the 29th of February

## 1.0.0 - 2023-01-01 [YANKED]

First stable release.

[1.1.0]: https://example.com/compare/1.0.0...1.1.0
[homepage]: https://example.com
";

/// Writes `contents` to `CHANGELOG.md` in `dir`
pub fn write_changelog(dir: &Path, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, contents)?;
    Ok(path)
}

/// Initialises a repository in `dir` with a committer configured
pub fn init_repository(dir: &Path) -> Result<git2::Repository, git2::Error> {
    let repo = git2::Repository::init(dir)?;
    {
        let mut config = repo.config()?;
        config.set_str("user.name", "Release Bot")?;
        config.set_str("user.email", "release@example.com")?;
    }
    Ok(repo)
}
