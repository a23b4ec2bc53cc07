//! Article entity model and DTOs.

use articles_core::article::{validate_create, validate_update};
use articles_core::error::CoreError;
use articles_core::sanitize::{sanitize_content, sanitize_title};
use articles_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An article row from the `articles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub style: String,
    pub content: String,
    pub date_published: Timestamp,
}

impl Article {
    /// Return the article with `title` escaped and `content` stripped of
    /// script-capable markup. Every article leaving the service goes
    /// through here.
    pub fn sanitize(self) -> Self {
        Self {
            title: sanitize_title(&self.title),
            content: sanitize_content(&self.content),
            ..self
        }
    }
}

/// The writable columns of an article, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub style: String,
    pub content: String,
}

/// DTO for creating a new article.
///
/// Every field is optional at the serde level so a missing one surfaces as a
/// [`CoreError::MissingField`] instead of a deserialization rejection.
/// `id` and `date_published` are assigned by storage and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArticle {
    pub title: Option<String>,
    pub style: Option<String>,
    pub content: Option<String>,
}

impl CreateArticle {
    /// Check required fields and turn the request into insertable fields.
    pub fn validate(self) -> Result<ArticleFields, CoreError> {
        let (title, style, content) = validate_create(self.title, self.style, self.content)?;
        Ok(ArticleFields {
            title,
            style,
            content,
        })
    }
}

/// DTO for patching an existing article. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub style: Option<String>,
    pub content: Option<String>,
}

impl UpdateArticle {
    /// Ensure the patch carries at least one valid field.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_update(
            self.title.as_deref(),
            self.style.as_deref(),
            self.content.as_deref(),
        )
    }

    /// Apply the supplied fields on top of `existing`. Omitted fields keep
    /// their stored values; `id` and `date_published` are never touched.
    pub fn merge(self, existing: &Article) -> ArticleFields {
        ArticleFields {
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            style: self.style.unwrap_or_else(|| existing.style.clone()),
            content: self.content.unwrap_or_else(|| existing.content.clone()),
        }
    }
}
