//! Integration tests for the article repository.
//!
//! Covers id assignment, copy isolation, merge-patch updates and delete
//! semantics. Stores run with zero latency.

mod common;

use academy_core::error::CoreError;
use academy_core::roles::RoleTag;
use academy_db::models::article::{CreateArticle, UpdateArticle};
use academy_db::repositories::ArticleRepo;
use academy_db::Latency;
use assert_matches::assert_matches;
use chrono::Utc;
use common::{article, march, roles};

fn empty_repo() -> ArticleRepo {
    ArticleRepo::new(Vec::new(), Latency::none())
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nth_create_into_empty_store_gets_id_n() {
    let repo = empty_repo();
    for expected in 1..=5 {
        let created = repo
            .create(&CreateArticle::new(format!("Post {expected}"), "body"))
            .await;
        assert_eq!(created.id, expected);
    }
}

#[tokio::test]
async fn deleting_the_max_lets_its_id_be_reused() {
    let repo = empty_repo();
    let a = repo.create(&CreateArticle::new("A", "a")).await;
    let b = repo.create(&CreateArticle::new("B", "b")).await;
    assert_eq!((a.id, b.id), (1, 2));

    repo.delete(b.id).await.unwrap();
    let c = repo.create(&CreateArticle::new("C", "c")).await;
    assert_eq!(c.id, 2);
}

#[tokio::test]
async fn deleting_a_lower_id_does_not_renumber_or_reuse() {
    let repo = empty_repo();
    for title in ["A", "B", "C"] {
        repo.create(&CreateArticle::new(title, "x")).await;
    }
    repo.delete(1).await.unwrap();

    let ids: Vec<i64> = repo.list().await.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(repo.create(&CreateArticle::new("D", "x")).await.id, 4);
}

#[tokio::test]
async fn next_id_follows_max_of_sparse_seed() {
    let repo = ArticleRepo::new(
        vec![article(1, "First", march(1)), article(3, "Third", march(3))],
        Latency::none(),
    );
    let created = repo.create(&CreateArticle::new("Next", "body")).await;
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn create_after_max_id_seed_stays_positive_and_unique() {
    let repo = ArticleRepo::new(
        vec![article(1, "First", march(1)), article(i64::MAX, "Last", march(2))],
        Latency::none(),
    );
    let created = repo.create(&CreateArticle::new("Next", "body")).await;
    assert_eq!(created.id, 2);
    assert_eq!(repo.list().await.len(), 3);
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_keeps_insertion_order() {
    let repo = ArticleRepo::new(
        vec![article(2, "Newer", march(10)), article(1, "Older", march(1))],
        Latency::none(),
    );
    let titles: Vec<String> = repo.list().await.into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn returned_copies_do_not_alias_store_state() {
    let repo = ArticleRepo::new(vec![article(1, "Original", march(1))], Latency::none());

    let mut listed = repo.list().await;
    listed[0].title = "Mutated".to_string();
    listed.clear();

    let mut found = repo.find_by_id(1).await.unwrap();
    found.allowed_roles.clear();

    let after = repo.list().await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].title, "Original");
    assert_eq!(after[0].allowed_roles, roles(&RoleTag::ALL));
}

#[tokio::test]
async fn find_missing_is_not_found() {
    let repo = empty_repo();
    let err = repo.find_by_id(9).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "article", id: 9 });
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_stamps_created_at_when_missing() {
    let repo = empty_repo();
    let before = Utc::now();
    let created = repo.create(&CreateArticle::new("Fresh", "body")).await;
    assert!(created.created_at >= before);
    assert!(created.created_at <= Utc::now());
}

#[tokio::test]
async fn create_keeps_supplied_created_at() {
    let repo = empty_repo();
    let mut input = CreateArticle::new("Backdated", "body");
    input.created_at = Some(march(2));
    let created = repo.create(&input).await;
    assert_eq!(created.created_at, march(2));
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), created);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_patched_fields() {
    let seeded = article(1, "Before", march(5));
    let repo = ArticleRepo::new(vec![seeded.clone()], Latency::none());

    let patch = UpdateArticle {
        title: Some("After".to_string()),
        ..Default::default()
    };
    let updated = repo.update(1, &patch).await.unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.id, seeded.id);
    assert_eq!(updated.content, seeded.content);
    assert_eq!(updated.allowed_roles, seeded.allowed_roles);
    assert_eq!(updated.created_at, march(5));
    assert_eq!(repo.find_by_id(1).await.unwrap(), updated);
}

#[tokio::test]
async fn update_can_overwrite_created_at_explicitly() {
    let repo = ArticleRepo::new(vec![article(1, "Post", march(5))], Latency::none());
    let patch = UpdateArticle {
        created_at: Some(march(20)),
        ..Default::default()
    };
    assert_eq!(repo.update(1, &patch).await.unwrap().created_at, march(20));
}

#[tokio::test]
async fn update_from_json_patch() {
    let repo = ArticleRepo::new(vec![article(1, "Post", march(5))], Latency::none());
    let patch: UpdateArticle =
        serde_json::from_str(r#"{"allowedRoles": ["master"], "thumbnailUrl": "https://img/x"}"#)
            .unwrap();
    let updated = repo.update(1, &patch).await.unwrap();
    assert_eq!(updated.allowed_roles, roles(&[RoleTag::Master]));
    assert_eq!(updated.thumbnail(), "https://img/x");
    assert_eq!(updated.title, "Post");
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let repo = empty_repo();
    let err = repo.update(3, &UpdateArticle::default()).await.unwrap_err();
    assert!(err.is_not_found());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_after_delete_is_not_found() {
    let repo = ArticleRepo::new(vec![article(1, "Gone", march(1))], Latency::none());
    repo.delete(1).await.unwrap();
    assert_matches!(repo.find_by_id(1).await, Err(CoreError::NotFound { .. }));
    assert_matches!(repo.delete(1).await, Err(CoreError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Caller-side validation
// ---------------------------------------------------------------------------

#[test]
fn validated_requires_title_and_content() {
    assert_matches!(
        CreateArticle::new("  ", "body").validated(),
        Err(CoreError::Validation(_))
    );
    assert_matches!(
        CreateArticle::new("Title", "").validated(),
        Err(CoreError::Validation(_))
    );
}

#[test]
fn validated_fills_default_thumbnail() {
    let input = CreateArticle::new("Title", "body").validated().unwrap();
    assert_eq!(
        input.thumbnail_url.as_deref(),
        Some(academy_core::validation::DEFAULT_THUMBNAIL_URL)
    );
}
