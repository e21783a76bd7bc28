use anyhow::Context;
use huddle_core::entities::User;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `huddle whoami`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(signed_in(ctx)?, flags.format)
}

fn signed_in(ctx: &AppContext) -> anyhow::Result<&User> {
    ctx.store
        .current_user()
        .context("no user is signed in (set workspace.current_user_email)")
}
