use anyhow::{Context, Result};
use clap::Parser;
use crm_meetings::{create_router, AppState, Config, MemoryStore, SeedData};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "crm-meetings", version, about = "Meeting records service for the CRM")]
struct Args {
    /// Config file path (extension optional)
    #[arg(long, default_value = "config/crm-meetings")]
    config: String,

    /// JSON seed file, overrides `store.seed_path`
    #[arg(long)]
    seed: Option<String>,

    /// Bind address, overrides `service.http.bind`
    #[arg(long)]
    bind: Option<String>,

    /// Port, overrides `service.http.port`
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let store = Arc::new(MemoryStore::new());
    match args.seed.or(cfg.store.seed_path) {
        Some(path) => {
            let seed = SeedData::from_file(&path).await?;
            store.load_seed(seed).await;
        }
        None => info!("No seed file configured, starting with an empty store"),
    }

    let app = create_router(AppState::new(store));

    let addr = cfg.service.http.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
