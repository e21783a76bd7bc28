//! End-to-end scenarios driving the store the way the workspace page does.

use huddle_store::HuddleStore;
use pretty_assertions::assert_eq;

#[test]
fn codex_group_message_scenario() {
    let mut store = HuddleStore::new();
    let project = store
        .create_project("Codex", "desc", &["a@x.com", "b@y.com"])
        .unwrap();

    let names: Vec<&str> = store
        .project_members(&project.id)
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b"]);

    let a = store.find_member_by_name(&project.id, "a").unwrap().id.clone();
    let b = store.find_member_by_name(&project.id, "b").unwrap().id.clone();

    let msg = store.create_message(&a, "hi", &project.id, None).unwrap();

    let all = store.messages_for_project(&project.id);
    assert_eq!(all, vec![&msg]);
    assert_eq!(store.group_messages(&project.id), vec![&msg]);
    assert!(store.private_thread(&project.id, &a, &b).is_empty());
    assert!(store.private_thread(&project.id, &b, &a).is_empty());
}

#[test]
fn codex_private_thread_scenario() {
    let mut store = HuddleStore::new();
    let project = store
        .create_project("Codex", "desc", &["a@x.com", "b@y.com"])
        .unwrap();
    let a = store.find_member_by_name(&project.id, "a").unwrap().id.clone();
    let b = store.find_member_by_name(&project.id, "b").unwrap().id.clone();

    let hi = store.create_message(&a, "hi", &project.id, Some(&b)).unwrap();
    let yo = store.create_message(&b, "yo", &project.id, Some(&a)).unwrap();

    assert_eq!(store.private_thread(&project.id, &a, &b), vec![&hi, &yo]);
    assert_eq!(store.private_thread(&project.id, &b, &a), vec![&hi, &yo]);
    assert!(store.group_messages(&project.id).is_empty());

    let views = store.message_views(&store.private_thread(&project.id, &a, &b));
    let rendered: Vec<(String, String)> = views
        .iter()
        .map(|v| {
            (
                v.sender_name.clone().unwrap_or_default(),
                v.message.body.clone(),
            )
        })
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("a".to_string(), "hi".to_string()),
            ("b".to_string(), "yo".to_string())
        ]
    );
}

#[test]
fn sidebar_lists_everyone_but_the_viewer() {
    let store = HuddleStore::with_sample_data();
    let project = &store.projects()[0];
    let me = store.current_user().unwrap();

    let partners: Vec<&str> = store
        .chat_partners(&project.id, &me.id)
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(partners, vec!["Thirumalai", "Surya Kumar", "Thiruppugazh"]);
}

#[test]
fn dashboard_after_new_project() {
    let mut store = HuddleStore::with_sample_data();
    store
        .create_project("Website Redesign", "Overhaul", &["alex@company.com", "sarah@company.com"])
        .unwrap();

    let summaries = store.project_summaries();
    let titles: Vec<(&str, u32)> = summaries
        .iter()
        .map(|s| (s.project.title.as_str(), s.member_count))
        .collect();
    assert_eq!(titles, vec![("Codex", 4), ("Website Redesign", 2)]);
}
