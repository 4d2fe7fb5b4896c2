//! Request handlers.
//!
//! Handlers delegate to the repository in `movies_db` and map errors via
//! [`crate::error::AppError`].

pub mod movies;
