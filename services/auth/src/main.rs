use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod cookie;
mod error;
mod jwt;
mod routes;
mod session;
mod state;
mod validation;

use crate::{config::AuthConfig, jwt::JwtService, session::SessionManager, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting authentication service");

    // Load configuration once; the secret is handed to the JWT service and nowhere else
    let config = AuthConfig::from_env()?;
    info!("Loaded configuration: {:?}", config);

    let jwt_service = JwtService::new(&config.jwt_secret)?;
    let session_manager = SessionManager::new(jwt_service, config.cookie_secure);

    let app_state = AppState { session_manager };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Authentication service listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
