use changelog::{Changelog, ChangelogError, DEFAULT_UNRELEASED_NAME};

use crate::cli::EntryArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result, usage_on_not_found};
use crate::ui;

pub fn execute(ctx: &CommandContext, args: &EntryArgs) -> Result<()> {
    if args.bullets.is_empty() && args.paragraphs.is_empty() {
        ui::warning_message("No entries given, use --bullet or --paragraph to add some");
    }

    let mut changelog = ctx.load()?;
    let version_name = apply(&mut changelog, args)?;
    ctx.save(&changelog)?;

    let count = args.bullets.len() + args.paragraphs.len();
    ui::success_message(&format!("Added {count} entries to version {version_name}"));
    Ok(())
}

/// Appends paragraphs then bullets to the section, returning the version name.
/// Without an explicit version, the newest unreleased one is used or created.
pub fn apply(changelog: &mut Changelog, args: &EntryArgs) -> Result<String> {
    let version = match args.version.as_deref() {
        Some(name) => changelog
            .get_version_mut(Some(name))
            .map_err(usage_on_not_found)?,
        None => changelog
            .current_version(Some(false), DEFAULT_UNRELEASED_NAME)
            .ok_or(CliError::Changelog(ChangelogError::NoVersions))?,
    };

    for paragraph in &args.paragraphs {
        version.add_entry(paragraph.as_str(), &args.section);
    }
    for bullet in &args.bullets {
        version.add_entry(format!("- {bullet}"), &args.section);
    }

    Ok(version.name.clone())
}
