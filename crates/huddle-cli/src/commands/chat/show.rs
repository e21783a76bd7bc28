use huddle_core::views::MessageView;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, keep_last};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    project_id: &str,
    with: Option<&str>,
    limit: Option<u32>,
    acting_as: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let mut messages = conversation(ctx, project_id, with, acting_as)?;
    keep_last(&mut messages, limit);
    output(&messages, flags.format)
}

/// Group channel when `with` is absent, otherwise the viewer's private thread with that member.
fn conversation(
    ctx: &AppContext,
    project_id: &str,
    with: Option<&str>,
    acting_as: Option<&str>,
) -> anyhow::Result<Vec<MessageView>> {
    let viewer = ctx.viewer(project_id, acting_as)?;
    let messages = match with {
        None => ctx.store.group_messages(project_id),
        Some(name) => {
            let counterpart = ctx.store.find_member_by_name(project_id, name)?;
            ctx.store
                .private_thread(project_id, &viewer.id, &counterpart.id)
        }
    };
    Ok(ctx.store.message_views(&messages))
}
