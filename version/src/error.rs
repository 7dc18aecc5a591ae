use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid semver: {0}")]
    Semver(#[from] semver::Error),

    #[error("No version number found in '{0}'")]
    NoVersionNumber(String),

    #[error("Cannot go from pre-release '{from}' back to '{to}'")]
    PreReleaseRegression { from: String, to: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<VersionError>),
}

impl VersionError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NoVersionNumber(name) => {
                format!("Version name '{name}' does not contain a version number")
            }
            Self::PreReleaseRegression { from, to } => {
                format!("Cannot increment pre-release '{from}' to an earlier stage '{to}'")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
