//! Well-known role name constants.
//!
//! Roles arrive in the `role` cookie. `admin` may mutate the catalog,
//! `user` is read-only.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Name of the cookie carrying the caller's role.
pub const ROLE_COOKIE: &str = "role";

/// Return `true` if `role` is one of the recognised roles.
pub fn is_known_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_USER
}
