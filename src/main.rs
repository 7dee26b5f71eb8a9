use anyhow::Context;

use trekdesk::catalog::Catalog;
use trekdesk::config::ServiceConfig;
use trekdesk::inquiry::InquiryComposer;
use trekdesk::routes::{AppState, api_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env()?;

    // ── Catalog ──────────────────────────────────────────────────────────
    let catalog = Catalog::from_config(&config).context("failed to load catalog")?;

    eprintln!("🧭 trekdesk v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}/api", config.port);
    eprintln!("   Contact: +{}", config.contact_phone);
    eprintln!(
        "   Catalog: {} ({} destinations)",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        catalog.destinations().len()
    );

    let state = AppState::new(catalog, InquiryComposer::new(config.contact_phone.clone()));
    let app = api_routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!(port = config.port, "API server started");
    axum::serve(listener, app).await?;

    Ok(())
}
