pub mod article;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Public path of the articles collection, used for `Location` headers.
pub const ARTICLES_PATH: &str = "/api/articles";

/// Build the `/api` route tree.
///
/// ```text
/// /articles                list, create
/// /articles/{id}           get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/articles", article::router())
}
