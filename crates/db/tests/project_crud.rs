//! Integration tests for the project repository.
//!
//! Exercises CRUD, listing order and filters, the title unique constraint,
//! and the atomic view counter against a real database.

use assert_matches::assert_matches;
use folio_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use folio_db::repositories::project_repo::TITLE_UNIQUE_CONSTRAINT;
use folio_db::repositories::ProjectRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: Some(title.to_string()),
        description: Some("A portfolio project description".to_string()),
        ..Default::default()
    }
}

async fn insert(pool: &PgPool, input: CreateProject) -> folio_db::models::project::Project {
    let validated = input.validate().expect("input should validate");
    ProjectRepo::create(pool, &validated)
        .await
        .expect("insert should succeed")
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_starts_with_zero_counters(pool: PgPool) {
    let project = insert(&pool, new_project("Counter Start")).await;

    assert_eq!(project.likes_count, 0);
    assert_eq!(project.views_count, 0);
    assert_eq!(project.status, "planning");
    assert_eq!(project.category, "other");
    assert_eq!(project.visibility, "public");
    assert!(!project.is_archived);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_id_and_title(pool: PgPool) {
    let created = insert(&pool, new_project("Findable")).await;

    let by_id = ProjectRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(by_id.map(|p| p.title), Some("Findable".to_string()));

    let by_title = ProjectRepo::find_by_title(&pool, "Findable").await.unwrap();
    assert_eq!(by_title.map(|p| p.id), Some(created.id));

    // Title lookup is case-sensitive.
    let other_case = ProjectRepo::find_by_title(&pool, "findable").await.unwrap();
    assert!(other_case.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let missing = ProjectRepo::find_by_id(&pool, folio_core::types::new_db_id())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_title_violates_unique_constraint(pool: PgPool) {
    insert(&pool, new_project("Only Once")).await;

    let validated = new_project("Only Once").validate().unwrap();
    let err = ProjectRepo::create(&pool, &validated).await.unwrap_err();

    assert!(folio_db::is_unique_violation(&err, TITLE_UNIQUE_CONSTRAINT));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_newest_first(pool: PgPool) {
    insert(&pool, new_project("First")).await;
    insert(&pool, new_project("Second")).await;
    insert(&pool, new_project("Third")).await;

    let projects = ProjectRepo::list(&pool, &ProjectFilter::default())
        .await
        .unwrap();
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_status_only_returns_matching(pool: PgPool) {
    insert(&pool, new_project("Still Planning")).await;
    insert(
        &pool,
        CreateProject {
            status: Some("completed".to_string()),
            ..new_project("Shipped One")
        },
    )
    .await;
    insert(
        &pool,
        CreateProject {
            status: Some("completed".to_string()),
            ..new_project("Shipped Two")
        },
    )
    .await;

    let completed = ProjectRepo::list_by_status(&pool, "completed").await.unwrap();
    let titles: Vec<_> = completed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Shipped Two", "Shipped One"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_search_and_category(pool: PgPool) {
    insert(
        &pool,
        CreateProject {
            description: Some("Realtime telemetry dashboard for drones".to_string()),
            category: Some("iot".to_string()),
            ..new_project("Skywatch")
        },
    )
    .await;
    insert(
        &pool,
        CreateProject {
            tags: Some(vec!["Rust".to_string(), "cli".to_string()]),
            category: Some("desktop".to_string()),
            ..new_project("Ledger Tool")
        },
    )
    .await;

    let by_text = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            search: Some("telemetry".to_string()),
            category: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text[0].title, "Skywatch");

    let by_tag = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            search: Some("rust".to_string()),
            category: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Ledger Tool");

    let by_category = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            search: None,
            category: Some("iot".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "Skywatch");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_changes_only_supplied_fields(pool: PgPool) {
    let created = insert(
        &pool,
        CreateProject {
            image_url: Some("https://example.com/cover.png".to_string()),
            code_url: Some("https://example.com/repo".to_string()),
            tags: Some(vec!["web".to_string()]),
            ..new_project("Patch Me")
        },
    )
    .await;

    let changes = UpdateProject {
        status: Some("in-progress".to_string()),
        image_url: Some(String::new()),
        ..Default::default()
    }
    .validate()
    .unwrap();

    let updated = ProjectRepo::update(&pool, created.id, &changes)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.status, "in-progress");
    assert_eq!(updated.image_url, None, "empty string clears the link");
    assert_eq!(updated.code_url.as_deref(), Some("https://example.com/repo"));
    assert_eq!(updated.title, "Patch Me");
    assert_eq!(updated.tags, vec!["web"]);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let changes = UpdateProject {
        status: Some("on-hold".to_string()),
        ..Default::default()
    }
    .validate()
    .unwrap();

    let result = ProjectRepo::update(&pool, folio_core::types::new_db_id(), &changes)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_into_existing_title_is_rejected_by_constraint(pool: PgPool) {
    insert(&pool, new_project("Taken")).await;
    let other = insert(&pool, new_project("Free")).await;

    let changes = UpdateProject {
        title: Some("Taken".to_string()),
        ..Default::default()
    }
    .validate()
    .unwrap();

    let err = ProjectRepo::update(&pool, other.id, &changes)
        .await
        .unwrap_err();
    assert!(folio_db::is_unique_violation(&err, TITLE_UNIQUE_CONSTRAINT));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_is_permanent(pool: PgPool) {
    let created = insert(&pool, new_project("Short Lived")).await;

    assert!(ProjectRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ProjectRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// View counter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_increment_views_missing_project(pool: PgPool) {
    let result = ProjectRepo::increment_views(&pool, folio_core::types::new_db_id())
        .await
        .unwrap();
    assert_matches!(result, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_view_increments_are_not_lost(pool: PgPool) {
    let created = insert(&pool, new_project("Popular")).await;
    let n = 25;

    let tasks = (0..n).map(|_| {
        let pool = pool.clone();
        let id = created.id;
        tokio::spawn(async move { ProjectRepo::increment_views(&pool, id).await })
    });
    for result in futures::future::join_all(tasks).await {
        let count = result.expect("task should not panic").unwrap();
        assert!(count.is_some());
    }

    let reloaded = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.views_count, n);
}
