use anyhow::{Context, bail};
use huddle_config::HuddleConfig;
use huddle_core::entities::User;
use huddle_store::HuddleStore;

/// Shared application state built once per invocation.
pub struct AppContext {
    pub store: HuddleStore,
    pub config: HuddleConfig,
}

impl AppContext {
    pub fn init(config: HuddleConfig) -> anyhow::Result<Self> {
        let store = HuddleStore::from_config(&config.workspace)
            .context("failed to build the workspace store")?;
        tracing::debug!(
            projects = store.projects().len(),
            users = store.users().len(),
            "workspace ready"
        );
        Ok(Self { store, config })
    }

    /// Resolve who is looking at `project_id`: the member named by `--as`,
    /// otherwise the signed-in user, who must belong to the project.
    pub fn viewer(&self, project_id: &str, acting_as: Option<&str>) -> anyhow::Result<&User> {
        if let Some(name) = acting_as {
            return Ok(self.store.find_member_by_name(project_id, name)?);
        }

        let project = self.store.require_project(project_id)?;
        let Some(user) = self.store.current_user() else {
            bail!("no user is signed in; pass --as <name> to pick a project member");
        };
        if !project.has_member(&user.id) {
            bail!(
                "{} is not a member of project '{}'; pass --as <name>",
                user.name,
                project.title
            );
        }
        Ok(user)
    }
}
