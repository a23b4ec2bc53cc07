//! Repository for the `articles` table.

use articles_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, ArticleFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, style, content, date_published";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    ///
    /// `id` and `date_published` come from the column defaults.
    pub async fn create(pool: &PgPool, input: &ArticleFields) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, style, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.style)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all articles in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY id ASC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Overwrite the writable columns of an article. `date_published` is left alone.
    ///
    /// Returns the number of rows affected.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArticleFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE articles SET title = $2, style = $3, content = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.style)
        .bind(&input.content)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete an article by ID. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
