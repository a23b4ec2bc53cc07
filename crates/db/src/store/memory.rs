use std::collections::BTreeMap;

use articles_core::types::DbId;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ArticleStore, StoreError};
use crate::models::article::{Article, ArticleFields};

/// In-process [`ArticleStore`].
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Default)]
pub struct MemoryArticleStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Article>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `articles`, keeping their ids.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let mut inner = Inner::default();
        for article in articles {
            inner.last_id = inner.last_id.max(article.id);
            inner.rows.insert(article.id, article);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, fields: &ArticleFields) -> Result<Article, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let article = Article {
            id: inner.last_id,
            title: fields.title.clone(),
            style: fields.style.clone(),
            content: fields.content.clone(),
            date_published: Utc::now(),
        };
        inner.rows.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update_by_id(&self, id: DbId, fields: &ArticleFields) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.title = fields.title.clone();
                row.style = fields.style.clone();
                row.content = fields.content.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError> {
        let removed = self.inner.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
