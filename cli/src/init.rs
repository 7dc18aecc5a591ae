use anyhow::Context;
use std::fs;

use changelog::Changelog;

use crate::context::CommandContext;
use crate::error::Result;
use crate::ui;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.path.exists() {
        ui::confirm_or_abort(
            &format!(
                "Changelog file {} already exists. Would you like to overwrite it?",
                ctx.path.display()
            ),
            ctx.yes,
        )?;
    }

    if let Some(parent) = ctx.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    ctx.save(&Changelog::new())?;
    ui::success_message(&format!(
        "Created new changelog file at {}",
        ctx.path.display()
    ));
    Ok(())
}
