//! Handlers for the `/articles` resource.
//!
//! Every article placed in a response body is passed through
//! [`Article::sanitize`] first.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use articles_core::error::CoreError;
use articles_core::types::parse_db_id;
use articles_db::models::article::{Article, CreateArticle, UpdateArticle};

use crate::error::{AppError, AppResult};
use crate::routes::ARTICLES_PATH;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn article_not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Article" })
}

/// Resolve the `{id}` path segment to a stored article or return 404.
///
/// Ids that are not positive integers are reported as not found.
async fn ensure_article(state: &AppState, raw_id: &str) -> AppResult<Article> {
    let id = parse_db_id(raw_id).ok_or_else(article_not_found)?;
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(article_not_found)
}

/* --------------------------------------------------------------------------
Article CRUD
-------------------------------------------------------------------------- */

/// GET /api/articles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = state.store.list().await?;
    Ok(Json(articles.into_iter().map(Article::sanitize).collect()))
}

/// POST /api/articles
///
/// Responds 201 with the stored article and a `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticle>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let fields = input.validate()?;

    let article = state.store.insert(&fields).await?;

    tracing::info!(
        article_id = article.id,
        style = %article.style,
        "Article created"
    );

    let location = format!("{ARTICLES_PATH}/{}", article.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(article.sanitize()),
    ))
}

/// GET /api/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Article>> {
    let article = ensure_article(&state, &id).await?;
    Ok(Json(article.sanitize()))
}

/// PATCH /api/articles/{id}
///
/// Merges the supplied fields onto the stored article. Responds 204.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateArticle>, JsonRejection>,
) -> AppResult<StatusCode> {
    let existing = ensure_article(&state, &id).await?;

    let Json(input) = payload?;
    input.validate()?;

    let fields = input.merge(&existing);
    let affected = state.store.update_by_id(existing.id, &fields).await?;
    if affected == 0 {
        return Err(article_not_found());
    }

    tracing::info!(article_id = existing.id, "Article updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/articles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let existing = ensure_article(&state, &id).await?;

    let removed = state.store.delete_by_id(existing.id).await?;
    if removed == 0 {
        return Err(article_not_found());
    }

    tracing::info!(article_id = existing.id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}
