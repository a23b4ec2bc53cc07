//! Domain layer for the articles service.
//!
//! Holds the shared primitive types, the domain error, request validation
//! and the HTML sanitizer. Nothing in here touches HTTP or the database, so
//! the rules can be unit-tested in isolation.

pub mod article;
pub mod error;
pub mod sanitize;
pub mod types;
