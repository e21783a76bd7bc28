use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    project_id: &str,
    body: &str,
    to: Option<&str>,
    acting_as: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sender_id = ctx.viewer(project_id, acting_as)?.id.clone();
    let recipient_id = to
        .map(|name| {
            ctx.store
                .find_member_by_name(project_id, name)
                .map(|user| user.id.clone())
        })
        .transpose()?;

    let message = ctx
        .store
        .create_message(&sender_id, body, project_id, recipient_id.as_deref())?;
    let view = ctx
        .store
        .message_views(&[&message])
        .pop()
        .context("posted message has no view")?;
    output(&view, flags.format)
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{codex_context, codex_project_id, flags};

    #[test]
    fn group_post_lands_in_group_channel() {
        let mut ctx = codex_context();
        let project_id = codex_project_id(&ctx);
        let before = ctx.store.group_messages(&project_id).len();

        super::run(&project_id, "standup in 5", None, None, &mut ctx, &flags(None))
            .expect("message should be sent");

        let group = ctx.store.group_messages(&project_id);
        assert_eq!(group.len(), before + 1);
        assert_eq!(group[before].body, "standup in 5");
    }

    #[test]
    fn private_reply_as_other_member() {
        let mut ctx = codex_context();
        let project_id = codex_project_id(&ctx);

        super::run(
            &project_id,
            "on it",
            Some("Tharuneshvar"),
            Some("Surya Kumar"),
            &mut ctx,
            &flags(Some("Surya Kumar")),
        )
        .expect("message should be sent");

        let me = ctx.store.current_user().expect("signed in").id.clone();
        let surya = ctx
            .store
            .find_member_by_name(&project_id, "Surya Kumar")
            .expect("member")
            .id
            .clone();
        let thread = ctx.store.private_thread(&project_id, &me, &surya);
        assert_eq!(thread.last().map(|message| message.body.as_str()), Some("on it"));
    }

    #[test]
    fn messaging_yourself_is_rejected() {
        let mut ctx = codex_context();
        let project_id = codex_project_id(&ctx);
        let err = super::run(
            &project_id,
            "note to self",
            Some("Tharuneshvar"),
            None,
            &mut ctx,
            &flags(None),
        )
        .expect_err("recipient equals sender");
        assert!(err.to_string().contains("Invalid input"));
    }
}
