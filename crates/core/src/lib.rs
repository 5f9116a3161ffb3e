//! Domain types and rules for the film library.
//!
//! This crate has no I/O. It holds the shared ID type, the domain error
//! enum, role names, and the validation and query-shaping rules for actors
//! and movies that both the database and API crates rely on.

pub mod actor;
pub mod error;
pub mod movie;
pub mod roles;
pub mod types;
