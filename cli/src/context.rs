use std::path::PathBuf;

use changelog::Changelog;

use crate::error::{CliError, Result};
use crate::ui;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub path: PathBuf,
    pub verbose: bool,
    pub yes: bool,
}

impl CommandContext {
    pub fn new(path: PathBuf, verbose: bool, yes: bool) -> Self {
        Self { path, verbose, yes }
    }

    /// Reads the changelog, which must already exist
    pub fn load(&self) -> Result<Changelog> {
        if !self.path.exists() {
            return Err(CliError::MissingChangelog(self.path.clone()));
        }

        let changelog = Changelog::read(&self.path)?;
        ui::verbose_message(
            self.verbose,
            &format!(
                "Read {} versions from {}",
                changelog.len(),
                self.path.display()
            ),
        );
        Ok(changelog)
    }

    pub fn save(&self, changelog: &Changelog) -> Result<()> {
        changelog.write(Some(self.path.as_path()))?;
        ui::verbose_message(self.verbose, &format!("Wrote {}", self.path.display()));
        Ok(())
    }
}
