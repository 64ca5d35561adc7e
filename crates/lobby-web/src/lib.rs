pub mod auth;
pub mod middleware;
pub mod pages;
pub mod session;
pub mod views;

use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    middleware::from_fn,
    routing::get,
};
use axum_extra::extract::cookie::Key;
use tower_http::trace::TraceLayer;

use lobby_store::{CredentialScheme, UserStore};

// Fixed signing secret for the session cookie. Hardcoded on purpose: the
// app this reproduces shipped a static secret, and that weakness is part
// of its documented behavior.
const SESSION_SIGNING_SECRET: &[u8] =
    b"lobby-insecure-dev-signing-secret-lobby-insecure-dev-signing-secret";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    key: Key,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(store),
            key: Key::from(SESSION_SIGNING_SECRET),
        }
    }
}

// Lets SignedCookieJar pull the signing key out of the app state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Build the application router. `/users.json` is only mounted under the
/// plaintext credential scheme — it is that variant's debug endpoint, and
/// it has no auth gate (a known gap, kept as-is).
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(pages::home))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout));

    if state.store.credential_scheme() == CredentialScheme::Plaintext {
        app = app.route("/users.json", get(pages::list_users));
    }

    app.layer(from_fn(middleware::method_override))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
