#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use articles_api::app::build_app;
use articles_api::config::ServerConfig;
use articles_api::state::AppState;
use articles_core::types::DbId;
use articles_db::models::article::{Article, ArticleFields};
use articles_db::store::{ArticleStore, MemoryArticleStore, StoreError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn ArticleStore>) -> Router {
    build_app(AppState::new(store), &test_config())
}

/// A fresh in-memory store.
pub fn empty_store() -> Arc<MemoryArticleStore> {
    Arc::new(MemoryArticleStore::new())
}

/// An in-memory store seeded with [`sample_articles`].
pub fn seeded_store() -> Arc<MemoryArticleStore> {
    Arc::new(MemoryArticleStore::with_articles(sample_articles()))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn sample_articles() -> Vec<Article> {
    let at = |d| Utc.with_ymd_and_hms(2029, 1, d, 16, 28, 32).unwrap();
    vec![
        Article {
            id: 1,
            title: "First test post!".into(),
            style: "How-to".into(),
            content: "Lorem ipsum dolor sit amet, consectetur adipisicing elit.".into(),
            date_published: at(22),
        },
        Article {
            id: 2,
            title: "Second test post!".into(),
            style: "News".into(),
            content: "Natus consequuntur deserunt commodi, nobis qui inventore corrupti.".into(),
            date_published: at(23),
        },
        Article {
            id: 3,
            title: "Third test post!".into(),
            style: "Listicle".into(),
            content: "Possimus, voluptate? Necessitatibus est iusto magni.".into(),
            date_published: at(24),
        },
        Article {
            id: 4,
            title: "Fourth test post!".into(),
            style: "Story".into(),
            content: "Cum, exercitationem cupiditate dignissimos est perspiciatis.".into(),
            date_published: at(25),
        },
    ]
}

/// An article carrying an XSS payload in both text fields, and the way it
/// must look once served.
pub fn malicious_article() -> (Article, serde_json::Value) {
    let article = Article {
        id: 911,
        title: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.into(),
        style: "How-to".into(),
        content: r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#.into(),
        date_published: Utc::now(),
    };
    let expected = serde_json::json!({
        "id": 911,
        "style": "How-to",
        "title": r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#,
        "content": r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#,
    });
    (article, expected)
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every call fails, for exercising 5xx shaping.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ArticleStore for FailingStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Article>, StoreError> {
        Err(unavailable())
    }

    async fn insert(&self, _fields: &ArticleFields) -> Result<Article, StoreError> {
        Err(unavailable())
    }

    async fn update_by_id(&self, _id: DbId, _fields: &ArticleFields) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// Counting store
// ---------------------------------------------------------------------------

/// Wraps the seeded in-memory store and counts every write that reaches it.
pub struct CountingStore {
    inner: MemoryArticleStore,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingStore {
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryArticleStore::with_articles(sample_articles()),
            updates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        })
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleStore for CountingStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        self.inner.list().await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, fields: &ArticleFields) -> Result<Article, StoreError> {
        self.inner.insert(fields).await
    }

    async fn update_by_id(&self, id: DbId, fields: &ArticleFields) -> Result<u64, StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update_by_id(id, fields).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
