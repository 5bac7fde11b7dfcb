//! Q&A server binary
//!
//! Run with: cargo run -p docqa --bin docqa-server -- --config crates/docqa/docqa.example.toml

use clap::Parser;
use docqa::{config::DocQaConfig, server::DocQaServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Document Q&A server
#[derive(Parser)]
#[command(name = "docqa-server", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config and PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = DocQaConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Upload directory: {}", config.storage.upload_dir.display());
    tracing::info!("  - Generation model: {}", config.generation.model);
    tracing::info!("  - Top chunks per question: {}", config.retrieval.top_k);
    tracing::info!("  - Allowed origins: {}", config.server.allowed_origins.join(", "));

    let server = DocQaServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}/api", server.address());
    println!("  Health: http://{}/api/health", server.address());
    println!("\nEndpoints:");
    println!("  POST   /api/upload        - Upload a document");
    println!("  GET    /api/documents     - List documents");
    println!("  DELETE /api/documents/:id - Delete a document");
    println!("  POST   /api/ask           - Ask a question");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
