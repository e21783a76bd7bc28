//! Building a store from workspace configuration.

use huddle_config::WorkspaceConfig;
use huddle_core::enums::EntityType;
use huddle_store::{HuddleStore, StoreError};

#[test]
fn default_config_seeds_sample_workspace() {
    let store = HuddleStore::from_config(&WorkspaceConfig::default()).unwrap();
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.current_user().map(|u| u.name.as_str()), Some("Tharuneshvar"));
}

#[test]
fn seeding_can_be_disabled() {
    let config = WorkspaceConfig {
        seed_sample_data: false,
        current_user_email: String::new(),
    };
    let store = HuddleStore::from_config(&config).unwrap();
    assert!(store.projects().is_empty());
    assert!(store.users().is_empty());
    assert!(store.current_user().is_none());
}

#[test]
fn configured_email_picks_the_signed_in_user() {
    let config = WorkspaceConfig {
        seed_sample_data: true,
        current_user_email: "Surya@Codex.com".into(),
    };
    let store = HuddleStore::from_config(&config).unwrap();
    assert_eq!(store.current_user().map(|u| u.name.as_str()), Some("Surya Kumar"));
}

#[test]
fn unknown_configured_email_is_not_found() {
    let config = WorkspaceConfig {
        seed_sample_data: true,
        current_user_email: "ghost@codex.com".into(),
    };
    let err = HuddleStore::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity_type: EntityType::User,
            ..
        }
    ));
}
