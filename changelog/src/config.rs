/// Header written at the top of a new changelog
pub const DEFAULT_HEADER: &str =
    "# Changelog\n\nAll notable changes to this project will be documented in this file";

/// Name given to a version created to collect unreleased changes
pub const DEFAULT_UNRELEASED_NAME: &str = "Unreleased";

/// File name used when no path is given
pub const DEFAULT_FILE_NAME: &str = "CHANGELOG.md";

/// Configuration options for new changelogs
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub header: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
        }
    }
}
