use changelog::{Changelog, ChangelogError, DEFAULT_UNRELEASED_NAME};

use crate::cli::TagArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result, usage_on_not_found};
use crate::ui;

pub fn execute(ctx: &CommandContext, args: &TagArgs) -> Result<()> {
    let mut changelog = ctx.load()?;
    let version_name = apply(&mut changelog, args)?;
    ctx.save(&changelog)?;

    let tag = args.tag.to_uppercase();
    if args.delete {
        ui::success_message(&format!("Removed tag {tag} from version {version_name}"));
    } else {
        ui::success_message(&format!("Added tag {tag} to version {version_name}"));
    }
    Ok(())
}

/// Adds or removes the tag, returning the name of the version changed
pub fn apply(changelog: &mut Changelog, args: &TagArgs) -> Result<String> {
    let version = match args.version.as_deref() {
        Some(name) => changelog
            .get_version_mut(Some(name))
            .map_err(usage_on_not_found)?,
        None => changelog
            .current_version(None, DEFAULT_UNRELEASED_NAME)
            .ok_or(CliError::Changelog(ChangelogError::NoVersions))?,
    };

    if args.delete {
        version.remove_tag(&args.tag).map_err(usage_on_not_found)?;
    } else {
        version.add_tag(&args.tag);
    }

    Ok(version.name.clone())
}
