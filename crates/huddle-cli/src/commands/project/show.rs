use serde_json::{Value, json};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&detail(ctx, id)?, flags.format)
}

fn detail(ctx: &AppContext, id: &str) -> anyhow::Result<Value> {
    let project = ctx.store.require_project(id)?;
    Ok(json!({
        "project": project,
        "members": ctx.store.project_members(id),
        "task_counts": ctx.store.task_counts(id),
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::detail;
    use crate::test_support::helpers::{codex_context, codex_project_id, flags};

    #[test]
    fn shows_members_and_task_counts() {
        let ctx = codex_context();
        let value = detail(&ctx, &codex_project_id(&ctx)).expect("project exists");

        assert_eq!(value["project"]["title"], "Codex");
        let members: Vec<&str> = value["members"]
            .as_array()
            .expect("members array")
            .iter()
            .filter_map(|member| member["name"].as_str())
            .collect();
        assert_eq!(
            members,
            ["Thirumalai", "Surya Kumar", "Thiruppugazh", "Tharuneshvar"]
        );
        assert_eq!(value["task_counts"]["in_progress"], 2);
        assert_eq!(value["task_counts"]["to_do"], 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let ctx = codex_context();
        let err = super::run("prj-ffffffff", &ctx, &flags(None)).expect_err("no such project");
        assert_eq!(err.to_string(), "Not found: project prj-ffffffff");
    }
}
