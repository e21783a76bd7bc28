use huddle_core::entities::User;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    project_id: &str,
    acting_as: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&partners(ctx, project_id, acting_as)?, flags.format)
}

fn partners<'a>(
    ctx: &'a AppContext,
    project_id: &str,
    acting_as: Option<&str>,
) -> anyhow::Result<Vec<&'a User>> {
    let viewer = ctx.viewer(project_id, acting_as)?;
    Ok(ctx.store.chat_partners(project_id, &viewer.id))
}
