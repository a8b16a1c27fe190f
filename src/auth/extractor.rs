use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::session::SESSION_COOKIE;
use crate::error::AppError;
use crate::models::SessionCheck;
use crate::state::SharedState;

/// The user behind a live `sessionID` cookie. Extracting it also slides the
/// session's expiry forward.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Err(AppError::Unauthorized("Not logged in".to_string()));
        };

        match state.auth.check_cookie(cookie.value()).await? {
            SessionCheck::Valid { user_id } => Ok(AuthUser { user_id }),
            SessionCheck::Expired => {
                tracing::debug!("Evicted expired session");
                Err(AppError::Unauthorized("Session expired".to_string()))
            }
            SessionCheck::Missing => Err(AppError::Unauthorized("Not logged in".to_string())),
        }
    }
}
