mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(
        db.clone(),
        http_client,
        config.form_agents,
        config.bcrypt_cost,
    );

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    startup::shutdown(db).await
}
