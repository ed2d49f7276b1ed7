// ABOUTME: Entry point for the devagent binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use clap::Parser;
use devagent_server::{DevagentConfig, ProviderStatus, build_agent, create_router};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "devagent", about = "Role-based developer agent demo server")]
struct Cli {
    /// Socket address to bind (overrides DEVAGENT_BIND)
    #[arg(long)]
    bind: Option<std::net::SocketAddr>,

    /// Generation provider to use (overrides DEVAGENT_PROVIDER)
    #[arg(long)]
    provider: Option<String>,

    /// Model identifier override (overrides DEVAGENT_MODEL)
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; ignore a missing file.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devagent=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = DevagentConfig::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }
    if let Some(model) = cli.model {
        config.model = Some(model);
    }

    let status = ProviderStatus::detect();
    let agent = build_agent(&config, &status);
    tracing::info!(agent = agent.kind(), "devagent starting up");

    let state = Arc::new(devagent_server::AppState::new(agent, status));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
