//! Caller identity extraction.
//!
//! Authentication itself lives outside this service; the authenticated
//! user id arrives as an `x-user-id` header (the shape a platform proxy
//! injects after verifying credentials). No header means the caller is
//! anonymous, which is allowed for analysis and anonymous history.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::constants::ERR_INVALID_USER_ID;
use crate::error::AppError;

/// Header carrying the authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// The identity every ownership check keys on
#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    /// None for anonymous (demo mode) callers
    pub user_id: Option<Uuid>,
}

impl UserContext {
    /// The user id, or a 400 for operations that cannot be anonymous
    pub fn require_user(&self) -> Result<Uuid, AppError> {
        self.user_id.ok_or_else(|| {
            AppError::InvalidInput("This operation requires an x-user-id header".to_string())
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(UserContext { user_id: None });
        };

        let user_id = value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .ok_or_else(|| {
                tracing::warn!("Malformed {} header", USER_ID_HEADER);
                AppError::InvalidInput(ERR_INVALID_USER_ID.to_string())
            })?;

        Ok(UserContext {
            user_id: Some(user_id),
        })
    }
}
