use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::ApiJson;
use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::auth::session::{
    clear_session_cookie, generate_session_id, session_cookie, SESSION_COOKIE,
};
use crate::envelope::{created, ok, ApiResult, Envelope};
use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::state::SharedState;

const BAD_CREDENTIALS: &str = "Incorrect email or password";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn signup(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> ApiResult<()> {
    if req.first_name.trim().is_empty()
        || req.last_name.trim().is_empty()
        || req.email.trim().is_empty()
        || req.password.is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let password_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let added = state
        .auth
        .add_user(NewUser {
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            email: req.email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("An account with this email already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    if !added {
        return Err(AppError::Internal("User insert changed no rows".to_string()));
    }

    tracing::info!("New account registered");
    created("Account created")
}

pub async fn login(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<(StatusCode, CookieJar, Json<Envelope<User>>), AppError> {
    // One key for the throttle and the lookup, whatever the padding or case.
    let email = req.email.trim().to_lowercase();

    if state.login_limiter.check(&email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let Some(user) = state.auth.get_user_by_email(&email).await? else {
        state.login_limiter.record_failure(&email);
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
    };

    let valid =
        password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        state.login_limiter.record_failure(&email);
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }
    state.login_limiter.reset(&email);

    let session_id = generate_session_id();
    if !state.auth.add_cookie(&session_id, user.id).await? {
        return Err(AppError::Internal("Session insert changed no rows".to_string()));
    }

    tracing::info!(user_id = user.id, "User logged in");

    let jar = session_cookie(
        &session_id,
        state.auth.session_ttl(),
        state.config.secure_cookies,
    );
    Ok((StatusCode::OK, jar, Json(Envelope::ok(user))))
}

/// Works with or without a live session; the cookie is always cleared.
pub async fn logout(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Envelope<()>>), AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.auth.remove_cookie(cookie.value()).await?;
    }

    Ok((clear_session_cookie(), Json(Envelope::done("Logged out"))))
}

pub async fn current_user(auth: AuthUser, State(state): State<SharedState>) -> ApiResult<User> {
    let user = state
        .auth
        .get_user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;
    ok(user)
}
