//! Domain types, errors, and validation rules for the movie catalog.
//!
//! This crate is I/O-free: it defines the shared primitive aliases, the
//! domain error enum, and the field constraints the HTTP layer enforces
//! before touching the database.

pub mod error;
pub mod movie;
pub mod types;
