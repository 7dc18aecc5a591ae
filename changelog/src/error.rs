use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangelogError {
    /// Reading or writing the changelog file failed
    #[error("Could not {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Version {0} not found in changelog")]
    VersionNotFound(String),

    #[error("Changelog has no versions")]
    NoVersions,

    #[error("Tag {tag} not found in version {version}")]
    TagNotFound { tag: String, version: String },

    #[error("Changelog has no file path")]
    NoPath,

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// The innermost error, with any context layers peeled off
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::WithContext(_, err) => err.root(),
            other => other,
        }
    }

    /// True for lookups that missed, as opposed to I/O failures
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.root(),
            Self::VersionNotFound(_) | Self::NoVersions | Self::TagNotFound { .. }
        )
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                action,
                path,
                source,
            } => format!("Could not {action} {}: {source}", path.display()),
            Self::NoVersions => "Changelog does not contain any versions yet".to_string(),
            Self::NoPath => "No path given for the changelog file".to_string(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_message_names_file() {
        let err = ChangelogError::io(
            "read",
            "docs/CHANGELOG.md",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.user_message(), "Could not read docs/CHANGELOG.md: missing");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_context_keeps_not_found() {
        let err = ChangelogError::VersionNotFound("2.0.0".to_string()).with_context("show");
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "show: Version 2.0.0 not found in changelog");
    }
}
