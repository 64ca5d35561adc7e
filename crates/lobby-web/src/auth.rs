use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::SignedCookieJar;
use tracing::debug;

use lobby_types::forms::{LoginForm, RegisterForm};

use crate::{AppState, session, views};

// Plain 302, which is what a form post here has always answered with.
fn found(path: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, path)]).into_response()
}

pub async fn register_page() -> Html<String> {
    Html(views::register_page())
}

/// `POST /register`. All three fields must be non-empty and the
/// confirmation must match; anything else bounces straight back to the
/// form with no error detail. Success logs the new user in.
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, StatusCode> {
    if form.email.is_empty()
        || form.password.is_empty()
        || form.password_confirm.is_empty()
        || form.password != form.password_confirm
    {
        debug!("register rejected, bouncing back to form");
        return Ok(found("/register"));
    }

    let user = state
        .store
        .register(&form.email, &form.password)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((session::establish(jar, &user.id), found("/")).into_response())
}

pub async fn login_page() -> Html<String> {
    Html(views::login_page())
}

/// `POST /login`. An unknown email and a wrong password are not told
/// apart; both redirect back to the form with no message.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, StatusCode> {
    if form.email.is_empty() || form.password.is_empty() {
        return Ok(found("/login"));
    }

    let user = state
        .store
        .login(&form.email, &form.password)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match user {
        Some(user) => Ok((session::establish(jar, &user.id), found("/")).into_response()),
        None => {
            debug!("login failed, bouncing back to form");
            Ok(found("/login"))
        }
    }
}

pub async fn logout(jar: SignedCookieJar) -> Response {
    (session::clear(jar), found("/")).into_response()
}
