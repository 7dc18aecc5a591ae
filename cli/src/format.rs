use crate::context::CommandContext;
use crate::error::Result;
use crate::ui;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let changelog = ctx.load()?;
    ctx.save(&changelog)?;
    ui::success_message(&format!(
        "Reformatted changelog file at {}",
        ctx.path.display()
    ));
    Ok(())
}
