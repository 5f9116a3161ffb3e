//! Role-cookie authorization extractors for Axum handlers.
//!
//! Callers identify themselves with a `role` cookie whose value is `admin`
//! or `user`. Read endpoints take [`AuthRole`]; mutating endpoints take
//! [`RequireAdmin`], which leaves `user` callers with read-only access.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use filmlib_core::error::CoreError;
use filmlib_core::roles::{is_known_role, ROLE_ADMIN, ROLE_COOKIE};
use tower_cookies::Cookies;

use crate::error::AppError;
use crate::state::AppState;

/// The caller's role, taken from the `role` cookie.
///
/// Rejects with 401 when the cookie is missing or holds an unknown role.
#[derive(Debug, Clone)]
pub struct AuthRole {
    pub role: String,
}

impl AuthRole {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

impl FromRequestParts<AppState> for AuthRole {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = parts.extract::<Cookies>().await.map_err(|(_, msg)| {
            tracing::error!(error = msg, "Cookie jar unavailable");
            AppError::Core(CoreError::Unauthorized("Missing role cookie".into()))
        })?;

        let role = cookies
            .get(ROLE_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing role cookie".into()))
            })?;

        if !is_known_role(&role) {
            tracing::debug!(%role, "Rejected unknown role");
            return Err(AppError::Core(CoreError::Unauthorized(format!(
                "Unknown role '{role}'"
            ))));
        }

        Ok(AuthRole { role })
    }
}

/// Requires the `admin` role. Rejects with 403 Forbidden for `user`.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(role): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthRole);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthRole::from_request_parts(parts, state).await?;
        if !auth.is_admin() {
            tracing::warn!(
                role = %auth.role,
                method = %parts.method,
                uri = %parts.uri,
                "Write attempt without admin role"
            );
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(auth))
    }
}
