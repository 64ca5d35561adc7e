use anyhow::Result;
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

use lobby_store::UserStore;
use lobby_types::{User, UserId};

/// Cookie carrying the logged-in user's id. Signed, not encrypted: the id
/// is readable by the client but cannot be tampered with.
pub const SESSION_COOKIE: &str = "session";

/// Store the user id in the session after a successful login or register.
pub fn establish(jar: SignedCookieJar, id: &UserId) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true),
    )
}

/// Drop the session cookie entirely.
pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// Resolve the session to a user, if any. A missing cookie, a bad
/// signature, or a stale id all read as anonymous.
pub fn current_user(jar: &SignedCookieJar, store: &UserStore) -> Result<Option<User>> {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => store.find(&UserId::from(cookie.value().to_owned())),
        None => Ok(None),
    }
}
