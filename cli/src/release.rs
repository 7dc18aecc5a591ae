use anyhow::Context;
use chrono::Utc;
use std::fs;

use changelog::{Changelog, ChangelogError, DEFAULT_UNRELEASED_NAME, VersionEntry};
use git::{RealGitRepository, Repository};

use crate::cli::ReleaseArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;

/// Name a version starts from when nothing in the changelog looks like one
const INITIAL_VERSION: &str = "0.0.0";

pub fn execute(ctx: &CommandContext, args: &ReleaseArgs) -> Result<()> {
    let mut changelog = ctx.load()?;
    let new_name = next_name(&changelog, args)?;
    ui::verbose_message(ctx.verbose, &format!("Next version name: {new_name}"));

    let renamed = rename_current(&mut changelog, &new_name, |old| {
        ui::confirm_or_abort(
            &format!("Rename release version \"{old}\" to \"{new_name}\"?"),
            ctx.yes,
        )
    })?;

    if let Some(old_name) = renamed {
        ctx.save(&changelog)?;
        ui::success_message(&format!("Renamed version \"{old_name}\" to \"{new_name}\""));
    } else {
        ui::info_message(&format!("Version \"{new_name}\" is already current"));
    }

    if args.commit {
        let version = changelog.get_version(None)?;
        commit_release(ctx, version)?;
    }

    Ok(())
}

/// The name the current version is released under: `--version` if given,
/// otherwise the newest name containing a version number, bumped as requested
pub fn next_name(changelog: &Changelog, args: &ReleaseArgs) -> Result<String> {
    let base = match &args.version_name {
        Some(name) => name.clone(),
        None => changelog
            .iter()
            .find(|v| version::extract_version(&v.name).is_some())
            .map_or_else(|| INITIAL_VERSION.to_string(), |v| v.name.clone()),
    };

    let (release, pre) = (args.release_segment(), args.pre_segment());
    if release.is_none() && pre.is_none() {
        return Ok(base);
    }

    Ok(version::increment_version(&base, release, pre)?)
}

/// Renames the current version and dates it today. Renaming a version that
/// is already a release goes through `confirm` first. Returns the old name if
/// anything changed.
pub fn rename_current<F>(
    changelog: &mut Changelog,
    new_name: &str,
    confirm: F,
) -> Result<Option<String>>
where
    F: FnOnce(&str) -> Result<()>,
{
    let current = changelog
        .current_version(None, DEFAULT_UNRELEASED_NAME)
        .ok_or(CliError::Changelog(ChangelogError::NoVersions))?;

    if current.name == new_name {
        return Ok(None);
    }

    if current.is_released() {
        confirm(&current.name)?;
    }

    let old_name = std::mem::replace(&mut current.name, new_name.to_string());
    current.date = Some(Utc::now().date_naive());
    Ok(Some(old_name))
}

fn commit_release(ctx: &CommandContext, version: &VersionEntry) -> Result<()> {
    let mut progress = ProgressTracker::new("Release Commit").with_steps([
        "Opening git repository",
        "Staging changelog",
        "Creating commit",
        "Creating tag",
    ]);

    progress.start_step();
    let path = fs::canonicalize(&ctx.path)
        .with_context(|| format!("Failed to resolve {}", ctx.path.display()))?;
    let dir = path
        .parent()
        .context("Changelog path has no parent directory")?;
    let repo = RealGitRepository::open_at(dir)
        .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))?;
    progress.complete_step();

    progress.start_step();
    repo.stage(&path)?;
    let staged = repo.staged_changes()?;
    let unstaged = repo.unstaged_changes()?;
    progress.complete_step_with(&format!("{staged} staged, {unstaged} not staged"));

    if unstaged > 0 {
        let plural = if unstaged > 1 { "s" } else { "" };
        ui::warning_message(&format!(
            "You have {unstaged} untracked file{plural} that will not be included."
        ));
    }

    let kind = if version.is_released() { "" } else { "non-release " };
    let action = if staged > 0 {
        "Commit and create tag"
    } else {
        "Create tag"
    };
    ui::confirm_or_abort(
        &format!("{action} for {kind}version {}?", version.name),
        ctx.yes,
    )?;

    progress.start_step();
    if staged > 0 {
        let id = repo.commit(&commit_message(version))?;
        progress.complete_step_with(&format!("created commit {id}"));
    } else {
        progress.skip_step("no changes to commit");
    }

    progress.start_step();
    repo.create_tag(&version.name, &version.body(false))?;
    progress.complete_step_with(&format!("created tag \"{}\"", version.name));

    progress.complete();
    Ok(())
}

fn commit_message(version: &VersionEntry) -> String {
    format!("Version {}\n\n{}", version.name, version.body(true))
        .trim_end()
        .to_string()
}
