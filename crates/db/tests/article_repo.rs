//! Integration tests for the `articles` repository and the Postgres store.
//!
//! Exercises the repository layer against a real database. Enabled with
//! `--features pg-tests` and a `DATABASE_URL` pointing at a server where
//! `sqlx::test` may create scratch databases.

#![cfg(feature = "pg-tests")]

use articles_db::models::article::ArticleFields;
use articles_db::repositories::ArticleRepo;
use articles_db::store::{ArticleStore, PgArticleStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_article(title: &str, style: &str) -> ArticleFields {
    ArticleFields {
        title: title.to_string(),
        style: style.to_string(),
        content: format!("Content for {title}"),
    }
}

// ---------------------------------------------------------------------------
// ArticleRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_date(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("First", "News"))
        .await
        .unwrap();

    assert!(article.id > 0);
    assert_eq!(article.title, "First");
    assert_eq!(article.style, "News");
    assert_eq!(article.content, "Content for First");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_is_empty_then_ordered_by_id(pool: PgPool) {
    assert!(ArticleRepo::list(&pool).await.unwrap().is_empty());

    let a = ArticleRepo::create(&pool, &new_article("A", "Story")).await.unwrap();
    let b = ArticleRepo::create(&pool, &new_article("B", "Listicle")).await.unwrap();

    let ids: Vec<i64> = ArticleRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_changes_fields_but_not_date(pool: PgPool) {
    let created = ArticleRepo::create(&pool, &new_article("Before", "News"))
        .await
        .unwrap();

    let affected = ArticleRepo::update(&pool, created.id, &new_article("After", "Interview"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let found = ArticleRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title, "After");
    assert_eq!(found.style, "Interview");
    assert_eq!(found.date_published, created.date_published);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_and_delete_missing_row_affect_nothing(pool: PgPool) {
    assert_eq!(
        ArticleRepo::update(&pool, 999_999, &new_article("X", "News"))
            .await
            .unwrap(),
        0
    );
    assert_eq!(ArticleRepo::delete(&pool, 999_999).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = ArticleRepo::create(&pool, &new_article("Gone", "How-to"))
        .await
        .unwrap();

    assert_eq!(ArticleRepo::delete(&pool, created.id).await.unwrap(), 1);
    assert!(ArticleRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_style_violates_check_constraint(pool: PgPool) {
    let err = ArticleRepo::create(&pool, &new_article("Bad", "Sonnet"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("ck_articles_style"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// PgArticleStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn store_round_trips_through_trait(pool: PgPool) {
    let store = PgArticleStore::new(pool);

    store.ping().await.unwrap();

    let created = store.insert(&new_article("Via trait", "News")).await.unwrap();
    let found = store.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    assert_eq!(store.delete_by_id(created.id).await.unwrap(), 1);
    assert!(store.list().await.unwrap().is_empty());
}
