use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ChangelogConfig;
use crate::entry::VersionEntry;
use crate::error::ChangelogError;
use crate::markdown::join;
use crate::parser::Parser;
use crate::types::{LinkTable, Result};

/// An in-memory changelog: free-form header, versions newest first, and the
/// link table written at the bottom of the file
#[derive(Debug, Clone)]
pub struct Changelog {
    pub path: Option<PathBuf>,
    pub header: String,
    pub versions: Vec<VersionEntry>,
    pub links: LinkTable,
}

impl Default for Changelog {
    fn default() -> Self {
        Self::with_config(&ChangelogConfig::default())
    }
}

impl Changelog {
    /// An empty changelog with the default header and no backing file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &ChangelogConfig) -> Self {
        Self {
            path: None,
            header: config.header.clone(),
            versions: Vec::new(),
            links: LinkTable::new(),
        }
    }

    /// A changelog bound to `path`, loaded from it when the file exists
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let mut changelog = Self::new();
        changelog.path = Some(path.into());
        if changelog.path.as_deref().is_some_and(Path::exists) {
            changelog.reload()?;
        }
        Ok(changelog)
    }

    /// Reads and parses a changelog file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let mut changelog = Self::new();
        changelog.path = Some(path.into());
        changelog.reload()?;
        Ok(changelog)
    }

    /// Parses changelog text that did not come from a file
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let parsed = Parser::new().parse(text);
        Self {
            path: None,
            header: parsed.header,
            versions: parsed.versions,
            links: parsed.links,
        }
    }

    /// Replaces the contents with what is currently on disk at `path`
    ///
    /// # Errors
    /// Returns `NoPath` when the changelog is not bound to a file, or an I/O
    /// error if reading fails
    pub fn reload(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(ChangelogError::NoPath)?;
        let text =
            fs::read_to_string(&path).map_err(|e| ChangelogError::io("read", &path, e))?;

        let parsed = Parser::new().parse(&text);
        self.header = parsed.header;
        self.versions = parsed.versions;
        self.links = parsed.links;
        Ok(())
    }

    /// Writes the changelog to `path`, or to the path it was read from.
    /// The target is overwritten.
    ///
    /// # Errors
    /// Returns `NoPath` if no path is known, or an I/O error if writing fails
    pub fn write(&self, path: Option<&Path>) -> Result<()> {
        let target = path
            .or(self.path.as_deref())
            .ok_or(ChangelogError::NoPath)?;

        fs::write(target, self.to_markdown()).map_err(|e| ChangelogError::io("write", target, e))
    }

    /// The full markdown document
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut segments = Vec::with_capacity(self.versions.len() + 2);
        segments.push(self.header.clone());
        segments.extend(self.versions.iter().map(|v| v.text(true)));

        let mut links = self.links.clone();
        for version in &self.versions {
            if let Some(url) = version.link_url() {
                links.insert(version.name.to_lowercase(), url.to_string());
            }
        }

        let table: Vec<String> = links
            .iter()
            .map(|(id, url)| format!("[{id}]: {url}"))
            .collect();
        segments.push(table.join("\n"));

        join(segments)
    }

    /// Inserts a version at `index`, or at the end if the index is past it
    pub fn add_version(&mut self, index: usize, version: VersionEntry) -> &mut VersionEntry {
        let index = index.min(self.versions.len());
        self.versions.insert(index, version);
        &mut self.versions[index]
    }

    /// The version new changes belong to.
    ///
    /// With no filter this is simply the first version (an `Unreleased`
    /// version is created if there are none). `Some(true)` finds the newest
    /// release and never creates one. `Some(false)` finds the newest
    /// unreleased version, creating `new_version_name` at the top if every
    /// version is released.
    pub fn current_version(
        &mut self,
        released: Option<bool>,
        new_version_name: &str,
    ) -> Option<&mut VersionEntry> {
        let found = match released {
            None => (!self.versions.is_empty()).then_some(0),
            Some(wanted) => self.versions.iter().position(|v| v.is_released() == wanted),
        };

        match (found, released) {
            (Some(index), _) => self.versions.get_mut(index),
            (None, Some(true)) => None,
            (None, _) => Some(self.add_version(0, VersionEntry::new(new_version_name))),
        }
    }

    fn version_index(&self, name: Option<&str>) -> Result<usize> {
        if self.versions.is_empty() {
            return Err(match name {
                Some(name) => ChangelogError::VersionNotFound(name.to_string()),
                None => ChangelogError::NoVersions,
            });
        }

        match name {
            None => Ok(0),
            Some(name) => self
                .versions
                .iter()
                .position(|v| v.name == name)
                .ok_or_else(|| ChangelogError::VersionNotFound(name.to_string())),
        }
    }

    /// The version called `name`, or the first version if no name is given
    ///
    /// # Errors
    /// Returns a not-found error if there is no such version
    pub fn get_version(&self, name: Option<&str>) -> Result<&VersionEntry> {
        let index = self.version_index(name)?;
        Ok(&self.versions[index])
    }

    /// Mutable form of [`Changelog::get_version`]
    ///
    /// # Errors
    /// Returns a not-found error if there is no such version
    pub fn get_version_mut(&mut self, name: Option<&str>) -> Result<&mut VersionEntry> {
        let index = self.version_index(name)?;
        Ok(&mut self.versions[index])
    }

    /// Removes and returns the version called `name`
    ///
    /// # Errors
    /// Returns `VersionNotFound` if there is no such version
    pub fn remove_version(&mut self, name: &str) -> Result<VersionEntry> {
        let index = self.version_index(Some(name))?;
        Ok(self.versions.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionEntry> {
        self.versions.iter()
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a VersionEntry;
    type IntoIter = std::slice::Iter<'a, VersionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HEADER;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const DOCUMENT: &str = "# Changelog

Notes about this project.

## Unreleased

### Added

- shiny thing

## [1.0.0] - 2021-01-01

### Fixed

- crash

[1.0.0]: https://x.test/1.0.0
[docs]: https://x.test/docs
";

    #[test]
    fn test_new_changelog_serializes_header_only() {
        let changelog = Changelog::new();
        assert!(changelog.is_empty());
        assert_eq!(changelog.to_markdown(), format!("{DEFAULT_HEADER}\n"));
    }

    #[test]
    fn test_round_trip_is_stable() {
        let changelog = Changelog::parse(DOCUMENT);
        let first = changelog.to_markdown();
        let second = Changelog::parse(&first).to_markdown();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "# Changelog\n\nNotes about this project.\n\n## Unreleased\n\n### Added\n\n- shiny thing\n\n\
             ## [1.0.0] - 2021-01-01\n\n### Fixed\n\n- crash\n\n\
             [1.0.0]: https://x.test/1.0.0\n[docs]: https://x.test/docs\n"
        );
    }

    #[test]
    fn test_read_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, DOCUMENT).unwrap();

        let mut changelog = Changelog::read(&path).unwrap();
        assert_eq!(changelog.len(), 2);
        changelog
            .get_version_mut(Some("Unreleased"))
            .unwrap()
            .add_entry("- more", "added");
        changelog.write(None).unwrap();

        let reread = Changelog::read(&path).unwrap();
        assert_eq!(
            reread.get_version(None).unwrap().sections["Added"],
            vec!["- shiny thing", "- more"]
        );
        assert_eq!(
            reread.get_version(Some("1.0.0")).unwrap().link_url(),
            Some("https://x.test/1.0.0")
        );
    }

    #[test]
    fn test_with_path_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");

        let changelog = Changelog::with_path(&path).unwrap();
        assert!(changelog.is_empty());
        assert_eq!(changelog.header, DEFAULT_HEADER);

        changelog.write(None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_with_config_sets_header() {
        let config = ChangelogConfig {
            header: "# Release notes".to_string(),
        };
        let changelog = Changelog::with_config(&config);
        assert!(changelog.is_empty());
        assert_eq!(changelog.to_markdown(), "# Release notes\n");
        assert_eq!(Changelog::new().header, DEFAULT_HEADER);
    }

    #[test]
    fn test_write_without_path_fails() {
        let err = Changelog::new().write(None).unwrap_err();
        assert!(matches!(err, ChangelogError::NoPath));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Changelog::read(dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, ChangelogError::Io { action: "read", .. }));
    }

    #[test]
    fn test_current_version_creates_unreleased() {
        let mut changelog = Changelog::new();
        let version = changelog.current_version(Some(false), "Unreleased").unwrap();
        assert_eq!(version.name, "Unreleased");
        assert_eq!(changelog.len(), 1);
        assert_eq!(changelog.versions[0].name, "Unreleased");
    }

    #[test]
    fn test_current_version_released_never_creates() {
        let mut changelog = Changelog::new();
        assert!(changelog.current_version(Some(true), "Unreleased").is_none());
        assert!(changelog.is_empty());
    }

    #[test]
    fn test_current_version_filters() {
        let mut changelog = Changelog::parse(DOCUMENT);
        assert_eq!(
            changelog.current_version(Some(true), "x").unwrap().name,
            "1.0.0"
        );
        assert_eq!(
            changelog.current_version(None, "x").unwrap().name,
            "Unreleased"
        );

        changelog.remove_version("Unreleased").unwrap();
        let created = changelog.current_version(Some(false), "Next").unwrap();
        assert_eq!(created.name, "Next");
        assert_eq!(changelog.versions[0].name, "Next");
        assert_eq!(changelog.len(), 2);
    }

    #[test]
    fn test_get_version_not_found() {
        let changelog = Changelog::parse(DOCUMENT);
        let err = changelog.get_version(Some("9.9.9")).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, ChangelogError::VersionNotFound(ref n) if n == "9.9.9"));

        let empty = Changelog::new();
        assert!(matches!(empty.get_version(None), Err(ChangelogError::NoVersions)));
    }

    #[test]
    fn test_add_version_index_clamped() {
        let mut changelog = Changelog::parse(DOCUMENT);
        let added = changelog.add_version(
            99,
            VersionEntry::new("0.1.0").with_date(NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()),
        );
        added.add_entry("- first release", "");
        assert_eq!(changelog.versions.last().unwrap().name, "0.1.0");
        assert!(changelog.to_markdown().contains("## 0.1.0 - 2020-05-01\n\n- first release"));
    }

    #[test]
    fn test_version_link_added_to_table() {
        let mut changelog = Changelog::new();
        changelog.add_version(0, VersionEntry::new("2.0.0-RC").with_link("https://x.test/rc"));
        let text = changelog.to_markdown();
        assert!(text.contains("## [2.0.0-RC]"));
        assert!(text.ends_with("[2.0.0-rc]: https://x.test/rc\n"));
    }
}
