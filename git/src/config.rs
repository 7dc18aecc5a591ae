use git2::{Config as GitConfig, Repository as GitRepository, Signature};

use crate::error::{GitError, Result};

/// Who commits and tags are attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
}

impl AuthorInfo {
    /// A signature timestamped now
    ///
    /// # Errors
    /// Returns an error if git rejects the name or email
    pub fn signature(&self) -> Result<Signature<'static>> {
        Ok(Signature::now(&self.name, &self.email)?)
    }
}

pub trait Config {
    fn author(&self) -> Result<AuthorInfo>;
}

/// Git configuration as seen from a repository: its own `.git/config`
/// layered over the global and system files
pub struct RealGitConfig {
    config: GitConfig,
}

impl RealGitConfig {
    /// # Errors
    /// Returns an error if the configuration files cannot be opened
    pub fn from_repository(repo: &GitRepository) -> Result<Self> {
        Ok(Self {
            config: repo.config()?,
        })
    }

    fn required(&self, key: &str) -> Result<String> {
        self.config.get_string(key).map_err(|_| {
            GitError::MissingConfig(format!(
                "{key} is not set, configure it with `git config {key} <value>`"
            ))
        })
    }
}

impl Config for RealGitConfig {
    fn author(&self) -> Result<AuthorInfo> {
        Ok(AuthorInfo {
            name: self.required("user.name")?,
            email: self.required("user.email")?,
        })
    }
}
