use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `huddle projects`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    let mut summaries = ctx.store.project_summaries();
    summaries.truncate(usize::try_from(limit)?);
    output(&summaries, flags.format)
}
