use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;

/// Name of the cookie carrying the opaque session id.
pub const SESSION_COOKIE: &str = "sessionID";

/// 32 random bytes, hex encoded.
pub fn generate_session_id() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

pub fn session_cookie(id: &str, ttl: chrono::Duration, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build();

    CookieJar::new().add(cookie)
}

pub fn clear_session_cookie() -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(cookie)
}
