//! Article categories and request validation.
//!
//! Validation runs against the raw request fields before anything is
//! written to storage.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_TITLE: &str = "title";
pub const FIELD_STYLE: &str = "style";
pub const FIELD_CONTENT: &str = "content";

// ---------------------------------------------------------------------------
// Style constants
// ---------------------------------------------------------------------------

pub const STYLE_LISTICLE: &str = "Listicle";
pub const STYLE_HOW_TO: &str = "How-to";
pub const STYLE_NEWS: &str = "News";
pub const STYLE_INTERVIEW: &str = "Interview";
pub const STYLE_STORY: &str = "Story";

/// All valid article styles. Mirrors the check constraint on `articles.style`.
pub const VALID_STYLES: &[&str] = &[
    STYLE_LISTICLE,
    STYLE_HOW_TO,
    STYLE_NEWS,
    STYLE_INTERVIEW,
    STYLE_STORY,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Returns the value when it is present and not blank.
fn require(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(CoreError::MissingField { field })
}

/// Validate an article style against the known set.
pub fn validate_style(style: &str) -> Result<(), CoreError> {
    if !VALID_STYLES.contains(&style) {
        return Err(CoreError::Validation(format!(
            "Invalid style '{}'. Valid styles: {}",
            style,
            VALID_STYLES.join(", ")
        )));
    }
    Ok(())
}

/// Validate the fields of a create request and hand them back as
/// `(title, style, content)`.
///
/// Required fields are checked in the order `title`, `style`, `content` so
/// the first missing one is always the one reported.
pub fn validate_create(
    title: Option<String>,
    style: Option<String>,
    content: Option<String>,
) -> Result<(String, String, String), CoreError> {
    let title = require(FIELD_TITLE, title)?;
    let style = require(FIELD_STYLE, style)?;
    let content = require(FIELD_CONTENT, content)?;
    validate_style(&style)?;
    Ok((title, style, content))
}

/// Validate the fields of a partial update request.
///
/// At least one updatable field must be supplied. Supplied fields must not be
/// blank and a supplied style must be a known one.
pub fn validate_update(
    title: Option<&str>,
    style: Option<&str>,
    content: Option<&str>,
) -> Result<(), CoreError> {
    if title.is_none() && style.is_none() && content.is_none() {
        return Err(CoreError::EmptyUpdate);
    }

    for (field, value) in [(FIELD_TITLE, title), (FIELD_CONTENT, content)] {
        if let Some(v) = value {
            if v.trim().is_empty() {
                return Err(CoreError::Validation(format!("'{field}' must not be empty")));
            }
        }
    }

    if let Some(style) = style {
        validate_style(style)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
