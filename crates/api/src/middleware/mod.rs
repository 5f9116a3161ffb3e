//! Authorization extractors.
//!
//! - [`auth::AuthRole`] -- Requires a recognised `role` cookie.
//! - [`auth::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
