//! Server-rendered HTML. Three pages sharing a header partial; no
//! template engine, the markup is small enough to assemble by hand.

use lobby_types::User;

/// Class for a nav link: `"active"` when the link points at the page
/// being rendered. Derived from paths only.
pub fn active_path(nav_path: &str, current_path: &str) -> &'static str {
    if nav_path == current_path { "active" } else { "" }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn header(current_path: &str, user: Option<&User>) -> String {
    let session_links = match user {
        Some(user) => format!(
            r#"<span class="email">{}</span> <a href="/logout">Log out</a>"#,
            escape(&user.email)
        ),
        None => format!(
            r#"<a class="{}" href="/register">Register</a> <a class="{}" href="/login">Log in</a>"#,
            active_path("/register", current_path),
            active_path("/login", current_path),
        ),
    };

    format!(
        r#"<nav><a class="{}" href="/">Home</a> {}</nav>"#,
        active_path("/", current_path),
        session_links,
    )
}

fn layout(title: &str, current_path: &str, user: Option<&User>, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n{}\n</body>\n</html>\n",
        escape(title),
        header(current_path, user),
        body,
    )
}

pub fn home_page(user: Option<&User>) -> String {
    let body = match user {
        Some(user) => format!("<h1>Welcome back, {}</h1>", escape(&user.email)),
        None => "<h1>Welcome</h1>\n<p>Register or log in to get started.</p>".to_owned(),
    };
    layout("Home", "/", user, &body)
}

pub fn register_page() -> String {
    let body = r#"<h1>Register</h1>
<form method="post" action="/register">
  <label>Email <input type="email" name="email"></label>
  <label>Password <input type="password" name="password"></label>
  <label>Confirm password <input type="password" name="passwordConfirm"></label>
  <button type="submit">Register</button>
</form>"#;
    layout("Register", "/register", None, body)
}

pub fn login_page() -> String {
    let body = r#"<h1>Log in</h1>
<form method="post" action="/login">
  <label>Email <input type="email" name="email"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Log in</button>
</form>"#;
    layout("Log in", "/login", None, body)
}
