/// Domain-level errors raised by validation and lookups.
///
/// The `Display` text of the client-facing variants is exactly the message
/// returned in the `{ "error": { "message": ... } }` body.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing '{field}' in request body")]
    MissingField { field: &'static str },

    #[error("Request body must contain either 'title', 'style' or 'content'")]
    EmptyUpdate,

    #[error("{0}")]
    Validation(String),

    #[error("{entity} doesn't exist")]
    NotFound { entity: &'static str },
}
