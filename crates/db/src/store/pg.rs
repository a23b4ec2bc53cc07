use articles_core::types::DbId;
use async_trait::async_trait;

use super::{ArticleStore, StoreError};
use crate::models::article::{Article, ArticleFields};
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// [`ArticleStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        Ok(ArticleRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, StoreError> {
        Ok(ArticleRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert(&self, fields: &ArticleFields) -> Result<Article, StoreError> {
        Ok(ArticleRepo::create(&self.pool, fields).await?)
    }

    async fn update_by_id(&self, id: DbId, fields: &ArticleFields) -> Result<u64, StoreError> {
        Ok(ArticleRepo::update(&self.pool, id, fields).await?)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError> {
        Ok(ArticleRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
