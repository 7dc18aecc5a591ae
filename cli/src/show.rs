use changelog::{Changelog, ChangelogError, DEFAULT_UNRELEASED_NAME, VersionEntry};

use crate::cli::ShowArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result, usage_on_not_found};

pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let mut changelog = ctx.load()?;
    for text in render(&mut changelog, args)? {
        println!("{text}\n");
    }
    Ok(())
}

/// The text to print for each requested version
pub fn render(changelog: &mut Changelog, args: &ShowArgs) -> Result<Vec<String>> {
    let versions: Vec<&VersionEntry> = if args.all {
        changelog.iter().collect()
    } else if args.versions.is_empty() {
        let current = changelog
            .current_version(None, DEFAULT_UNRELEASED_NAME)
            .ok_or(CliError::Changelog(ChangelogError::NoVersions))?;
        vec![&*current]
    } else {
        args.versions
            .iter()
            .map(|name| changelog.get_version(Some(name.as_str())).map_err(usage_on_not_found))
            .collect::<Result<_>>()?
    };

    Ok(versions
        .into_iter()
        .map(|version| describe(version, args))
        .collect())
}

fn describe(version: &VersionEntry, args: &ShowArgs) -> String {
    if args.name {
        version.name.clone()
    } else if args.body {
        version.body(args.markdown)
    } else if args.header {
        version.header(args.markdown)
    } else {
        version.text(args.markdown)
    }
}
