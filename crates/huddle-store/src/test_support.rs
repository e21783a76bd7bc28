//! Shared test utilities for huddle-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use huddle_core::entities::Project;

    use crate::store::HuddleStore;

    /// A store holding one project "Codex" with members `a` and `b`.
    pub fn codex_store() -> (HuddleStore, Project) {
        let mut store = HuddleStore::new();
        let project = store
            .create_project("Codex", "desc", &["a@x.com", "b@y.com"])
            .unwrap();
        (store, project)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
