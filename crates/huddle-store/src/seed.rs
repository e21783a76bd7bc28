//! The built-in sample workspace: project "Codex", its four members, two
//! tasks in flight, and a short chat history with both group and private
//! messages.

use chrono::{NaiveDate, TimeZone, Utc};

use huddle_core::entities::{Project, User};
use huddle_core::enums::{EntityType, TaskStatus};

use crate::inputs::NewTask;
use crate::store::HuddleStore;

const PROJECT_TITLE: &str = "Codex";
const PROJECT_DESCRIPTION: &str = "Collaboration workspace for project Codex";
const PROJECT_CREATED: (i32, u32, u32) = (2025, 9, 6);

/// `(name, email)`.
const MEMBERS: [(&str, &str); 4] = [
    ("Thirumalai", "thirumalai@codex.com"),
    ("Surya Kumar", "surya@codex.com"),
    ("Thiruppugazh", "thiruppugazh@codex.com"),
    ("Tharuneshvar", "tharuneshvar@codex.com"),
];

/// Index into `MEMBERS` of the signed-in user.
const SIGNED_IN: usize = 3;

struct SeedTask {
    assignee: usize,
    title: &'static str,
    description: &'static str,
    due: (i32, u32, u32),
}

const TASKS: [SeedTask; 2] = [
    SeedTask {
        assignee: 0,
        title: "Design Homepage Mockup",
        description: "Create initial design mockups for the new homepage layout",
        due: (2025, 10, 15),
    },
    SeedTask {
        assignee: 1,
        title: "Set up Development Environment",
        description: "Configure development tools and environment for the project",
        due: (2025, 9, 20),
    },
];

struct SeedMessage {
    sender: usize,
    recipient: Option<usize>,
    /// `(hour, minute)` on the project's creation day, UTC.
    at: (u32, u32),
    body: &'static str,
}

const MESSAGES: [SeedMessage; 8] = [
    SeedMessage { sender: 0, recipient: None, at: (14, 0), body: "Welcome to Codex group chat!" },
    SeedMessage { sender: 1, recipient: None, at: (14, 30), body: "Let\u{2019}s plan the next milestones." },
    SeedMessage { sender: 2, recipient: None, at: (14, 45), body: "Shared docs are ready for review." },
    SeedMessage { sender: 3, recipient: None, at: (15, 0), body: "Great! I will start testing today." },
    SeedMessage { sender: 0, recipient: Some(3), at: (14, 15), body: "Hi Tharuneshvar, can you check the UI changes?" },
    SeedMessage { sender: 3, recipient: Some(0), at: (14, 20), body: "Sure, will review and get back." },
    SeedMessage { sender: 1, recipient: Some(3), at: (14, 25), body: "Tharuneshvar, update on backend fixes?" },
    SeedMessage { sender: 3, recipient: Some(1), at: (14, 40), body: "Almost done, latest build will be ready soon." },
];

/// Load the sample workspace into `store` and sign in as Tharuneshvar.
///
/// Records go through the regular ID generator, so a store seeded into an
/// empty state always gets the same IDs.
pub(crate) fn load_sample_workspace(store: &mut HuddleStore) {
    let member_ids: Vec<String> = MEMBERS
        .iter()
        .map(|(name, email)| {
            store.register_user(User {
                id: String::new(),
                name: (*name).to_string(),
                email: (*email).to_string(),
            })
        })
        .collect();

    let (y, m, d) = PROJECT_CREATED;
    let created_date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let project = Project {
        id: store.next_id(EntityType::Project),
        title: PROJECT_TITLE.to_string(),
        description: PROJECT_DESCRIPTION.to_string(),
        created_date,
        members: member_ids.clone(),
    };
    let project_id = project.id.clone();
    store.push_project(project);

    for seed in &TASKS {
        let (ty, tm, td) = seed.due;
        let due = NaiveDate::from_ymd_opt(ty, tm, td).unwrap_or(created_date);
        let task = NewTask::new(&project_id, seed.title, &member_ids[seed.assignee], due)
            .description(seed.description)
            .status(TaskStatus::InProgress);
        if let Err(error) = store.create_task(task) {
            tracing::error!(%error, "sample task rejected");
        }
    }

    for seed in &MESSAGES {
        let (hour, minute) = seed.at;
        let sent_at = Utc
            .with_ymd_and_hms(y, m, d, hour, minute, 0)
            .single()
            .unwrap_or_default();
        let recipient = seed.recipient.map(|idx| member_ids[idx].as_str());
        if let Err(error) = store.record_message(
            &member_ids[seed.sender],
            seed.body,
            &project_id,
            recipient,
            sent_at,
        ) {
            tracing::error!(%error, "sample message rejected");
        }
    }

    store.current_user = Some(member_ids[SIGNED_IN].clone());
    tracing::debug!(project_id = %project_id, "sample workspace loaded");
}
