pub mod helpers {
    use huddle_config::HuddleConfig;

    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    /// Context over the sample Codex workspace with default config.
    pub fn codex_context() -> AppContext {
        AppContext::init(HuddleConfig::default()).expect("sample workspace should load")
    }

    pub fn codex_project_id(ctx: &AppContext) -> String {
        ctx.store.projects()[0].id.clone()
    }

    pub fn flags(acting_as: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
            acting_as: acting_as.map(str::to_string),
        }
    }
}
