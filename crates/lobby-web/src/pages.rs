use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};
use axum_extra::extract::SignedCookieJar;

use lobby_types::User;

use crate::{AppState, session, views};

/// `GET /`. An unresolvable session is fine — the home page has an
/// anonymous view.
pub async fn home(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Html<String>, StatusCode> {
    let user = session::current_user(&jar, &state.store)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Html(views::home_page(user.as_ref())))
}

/// `GET /users.json`. Dumps every record, stored credentials included,
/// with no auth gate. Only mounted under the plaintext scheme; see the
/// router builder.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, StatusCode> {
    let users = state
        .store
        .all()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(users))
}
