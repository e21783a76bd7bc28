use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    title: &str,
    description: &str,
    members: &[String],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = ctx.store.create_project(title, description, members)?;
    output(
        &json!({
            "project": project,
            "members": ctx.store.project_members(&project.id),
        }),
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{codex_context, flags};

    #[test]
    fn creates_one_member_per_email() {
        let mut ctx = codex_context();
        let members = vec!["ana@x.com".to_string(), " ".to_string(), "bo@y.com".to_string()];
        super::run("Side", "", &members, &mut ctx, &flags(None)).expect("project should be created");

        let project = ctx.store.projects().last().expect("new project");
        assert_eq!(project.title, "Side");
        let names: Vec<&str> = ctx
            .store
            .project_members(&project.id)
            .iter()
            .map(|user| user.name.as_str())
            .collect();
        assert_eq!(names, ["ana", "bo"]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut ctx = codex_context();
        let before = ctx.store.projects().len();
        let err = super::run("  ", "", &[], &mut ctx, &flags(None)).expect_err("blank title");
        assert!(err.to_string().contains("Invalid input"));
        assert_eq!(ctx.store.projects().len(), before);
    }
}
