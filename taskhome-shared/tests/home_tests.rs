/// Integration tests for the home summary aggregation
///
/// Run with: cargo test -p taskhome-shared --test home_tests

mod common;

use common::test_pool;
use taskhome_shared::home::{
    get_home_summary, CURRENT_USER, MY_TASK_LIMIT, RECENT_PROJECT_LIMIT,
};
use taskhome_shared::models::project::{CreateProject, Project};
use taskhome_shared::models::task::{CreateTask, Task};
use taskhome_shared::models::workspace::Workspace;

async fn seed_project(pool: &sqlx::SqlitePool, workspace_id: i64, name: &str) -> Project {
    Project::create(
        pool,
        CreateProject {
            workspace_id,
            name: name.to_string(),
            color: None,
            icon: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_task(pool: &sqlx::SqlitePool, project_id: i64, name: &str, assignee: &str) -> Task {
    Task::create(
        pool,
        CreateTask {
            project_id,
            section_id: None,
            name: name.to_string(),
            description: None,
            status: "inbox".to_string(),
            assignee: Some(assignee.to_string()),
            due_date: None,
            priority: None,
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_empty_store_yields_empty_summary() {
    let pool = test_pool().await;

    let summary = get_home_summary(&pool, CURRENT_USER).await.unwrap();
    assert!(summary.my_tasks.is_empty());
    assert!(summary.recent_projects.is_empty());
}

#[tokio::test]
async fn test_recent_projects_truncated_to_limit_newest_first() {
    let pool = test_pool().await;
    let ws = Workspace::get_or_create(&pool, "Demo").await.unwrap();

    for i in 0..10 {
        seed_project(&pool, ws.id, &format!("project-{i}")).await;
    }

    let summary = get_home_summary(&pool, CURRENT_USER).await.unwrap();
    assert_eq!(summary.recent_projects.len(), RECENT_PROJECT_LIMIT);
    assert_eq!(summary.recent_projects[0].name, "project-9");
    assert_eq!(summary.recent_projects[7].name, "project-2");
}

#[tokio::test]
async fn test_my_tasks_truncated_to_limit_and_filtered_by_assignee() {
    let pool = test_pool().await;
    let ws = Workspace::get_or_create(&pool, "Demo").await.unwrap();
    let project = seed_project(&pool, ws.id, "p").await;

    for i in 0..25 {
        seed_task(&pool, project.id, &format!("mine-{i}"), "me").await;
    }
    seed_task(&pool, project.id, "not-mine", "someone-else").await;

    let summary = get_home_summary(&pool, CURRENT_USER).await.unwrap();
    assert_eq!(summary.my_tasks.len(), MY_TASK_LIMIT);
    // Newest first; "not-mine" was created last but belongs to someone else
    assert_eq!(summary.my_tasks[0].name, "mine-24");
    assert_eq!(summary.my_tasks[19].name, "mine-5");
    assert!(summary.my_tasks.iter().all(|t| t.name.starts_with("mine-")));
}

#[tokio::test]
async fn test_task_project_names_resolved_from_full_project_list() {
    let pool = test_pool().await;
    let ws = Workspace::get_or_create(&pool, "Demo").await.unwrap();

    // The owning project is pushed out of the top 8 by nine newer projects,
    // but the task must still resolve its name.
    let owner = seed_project(&pool, ws.id, "owner").await;
    for i in 0..9 {
        seed_project(&pool, ws.id, &format!("filler-{i}")).await;
    }
    seed_task(&pool, owner.id, "t", "me").await;

    let summary = get_home_summary(&pool, CURRENT_USER).await.unwrap();
    assert!(summary
        .recent_projects
        .iter()
        .all(|p| p.name != "owner"));
    assert_eq!(summary.my_tasks.len(), 1);
    assert_eq!(summary.my_tasks[0].project_name, "owner");
    assert_eq!(summary.my_tasks[0].project_id, owner.id);
}

#[tokio::test]
async fn test_home_scenario_one_of_two_tasks_is_mine() {
    let pool = test_pool().await;
    let ws = Workspace::get_or_create(&pool, "Demo").await.unwrap();
    let project = seed_project(&pool, ws.id, "My Project").await;

    let mut mine = CreateTask {
        project_id: project.id,
        section_id: None,
        name: "today-task".to_string(),
        description: None,
        status: "today".to_string(),
        assignee: Some("me".to_string()),
        due_date: None,
        priority: None,
    };
    Task::create(&pool, mine.clone()).await.unwrap();

    mine.name = "their-task".to_string();
    mine.status = "inbox".to_string();
    mine.assignee = Some("someone-else".to_string());
    Task::create(&pool, mine).await.unwrap();

    let summary = get_home_summary(&pool, CURRENT_USER).await.unwrap();
    assert!(summary
        .recent_projects
        .iter()
        .any(|p| p.name == "My Project"));
    assert_eq!(summary.my_tasks.len(), 1);
    assert_eq!(summary.my_tasks[0].name, "today-task");
    assert_eq!(summary.my_tasks[0].project_name, "My Project");
    assert_eq!(summary.my_tasks[0].status, "today");
}
