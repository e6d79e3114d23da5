//! contact-form server
//!
//! Loads configuration, initializes tracing and serves the contact form
//! until Ctrl-C.

use contact_form::config::ContactFormConfig;
use contact_form::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    contact_form::observability::init()?;

    let config = ContactFormConfig::load()?;
    let address = config.server.bind_address();
    let app = contact_form::router(AppState::with_config(config));

    let listener = TcpListener::bind(&address).await?;
    tracing::info!(%address, "contact form listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
