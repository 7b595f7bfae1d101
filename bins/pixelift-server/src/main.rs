//! pixelift-server: HTTP proxy endpoint for the AI image-enhancement provider.

use clap::Parser;
use pixelift_client::{ClientConfig, EnhancerClient};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod error;
mod types;

#[derive(Parser)]
#[command(name = "pixelift-server")]
#[command(about = "HTTP proxy for AI image enhancement")]
#[command(version)]
struct Cli {
    /// Address to bind the HTTP listener on
    #[arg(long, env = "PIXELIFT_BIND", default_value = "127.0.0.1:3000")]
    bind: String,

    /// Override the provider API root URL
    #[arg(long)]
    provider_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.provider_url {
        config = config.with_base_url(url);
    }
    let client = EnhancerClient::with_config(config)?;

    let app = app::router(client);
    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!(addr = %cli.bind, version = env!("CARGO_PKG_VERSION"), "pixelift-server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
