//! Request handlers.
//!
//! Handlers delegate to the injected article store and map errors via
//! [`AppError`](crate::error::AppError).

pub mod article;
