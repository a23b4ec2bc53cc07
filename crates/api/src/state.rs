use std::sync::Arc;

use articles_db::store::ArticleStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for the `articles` relation, chosen at startup.
    pub store: Arc<dyn ArticleStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }
}
