use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Version error: {0}")]
    Version(#[from] version::VersionError),

    #[error("Git error: {0}")]
    Git(#[from] git::GitError),

    #[error("Changelog file {0} does not exist")]
    MissingChangelog(PathBuf),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Aborted")]
    Aborted,

    #[error("Anyhow error: {0}")]
    AnyhowError(#[from] anyhow::Error),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Changelog(err) => err.user_message(),
            Self::Version(err) => err.user_message(),
            Self::Git(err) => err.user_message(),
            Self::MissingChangelog(path) => format!(
                "Changelog file {} does not exist. Create it by running `yaclog init`.",
                path.display()
            ),
            Self::Usage(msg) => msg.clone(),
            Self::Aborted => "Aborted!".to_string(),
            Self::AnyhowError(err) => format!("{err:#}"),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Lookups that miss are the user's mistake, not a failure of the tool
pub fn usage_on_not_found(err: changelog::ChangelogError) -> CliError {
    if err.is_not_found() {
        CliError::Usage(err.user_message())
    } else {
        CliError::Changelog(err)
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
