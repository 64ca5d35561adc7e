use serde::Deserialize;

/// Body of `POST /register`. Field names match the HTML form inputs;
/// missing fields decode as empty strings so validation (not the
/// deserializer) decides what happens to an incomplete submission.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
