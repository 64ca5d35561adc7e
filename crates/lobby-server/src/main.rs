use std::net::SocketAddr;

use anyhow::bail;
use tracing::info;

use lobby_store::{CredentialScheme, IdScheme, StoreConfig, UserStore};
use lobby_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lobby=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let credentials = std::env::var("LOBBY_CREDENTIALS").unwrap_or_else(|_| "hashed".into());

    // The two store flavors the app ships with: argon2-hashed passwords
    // with counter ids, or the plaintext demo with random ids (the one
    // that exposes /users.json).
    let config = match credentials.as_str() {
        "hashed" => StoreConfig {
            credentials: CredentialScheme::Hashed,
            ids: IdScheme::Sequential,
        },
        "plaintext" => StoreConfig {
            credentials: CredentialScheme::Plaintext,
            ids: IdScheme::Random,
        },
        other => bail!("unknown LOBBY_CREDENTIALS value: {other}"),
    };

    let state = AppState::new(UserStore::new(config));
    let app = lobby_web::router(state);

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Server is listening at http://localhost:{port}/");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
