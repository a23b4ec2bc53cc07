//! The storage seam used by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn ArticleStore>` so the backing store is chosen
//! once at startup and injected through application state.

mod memory;
mod pg;

use articles_core::types::DbId;
use async_trait::async_trait;

use crate::models::article::{Article, ArticleFields};

pub use memory::MemoryArticleStore;
pub use pg::PgArticleStore;

/// Errors raised by an [`ArticleStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row-level CRUD over the `articles` relation.
///
/// Each call is a single read or write; implementations provide whatever
/// atomicity a single statement has and nothing more.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// All articles, ordered by ascending id.
    async fn list(&self) -> Result<Vec<Article>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, StoreError>;

    /// Insert a row. The store assigns `id` and `date_published`.
    async fn insert(&self, fields: &ArticleFields) -> Result<Article, StoreError>;

    /// Overwrite the writable columns. Returns the number of rows affected.
    async fn update_by_id(&self, id: DbId, fields: &ArticleFields) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError>;

    /// Cheap reachability check for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
