use axum::{Router, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use twol_auth::{
    config::AppConfig,
    infrastructure::scheme_password_hasher::SchemePasswordHasher,
    presentation::handlers::credential_handler::create_credential_router,
    usecase::credential_usecase::CredentialUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a missing .env is fine, the process environment still applies
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = dotenv {
        tracing::debug!("no .env loaded: {e}");
    }

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        e
    })?;

    let password_hasher = SchemePasswordHasher::new(config.password_scheme);
    let credential_service = CredentialUsecase::new(password_hasher);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", create_credential_router(credential_service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(scheme = %config.password_scheme, "listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
