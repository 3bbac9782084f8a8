use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use reelvault_server::{
    AppState, Config, create_app,
    blob::BlobVault,
    store::{PostgresTitleStore, TitleStore},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "reelvault-server")]
#[command(about = "HTTP API for the Reelvault catalog")]
struct Cli {
    /// Bind host, overriding SERVER_HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding SERVER_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }

    let titles = connect_titles(&config).await?;
    let blobs = open_vault(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("invalid bind address")?;

    let state = AppState {
        config: Arc::new(config),
        titles,
        blobs,
    };
    let app = create_app(state);

    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

async fn connect_titles(config: &Config) -> anyhow::Result<Option<Arc<dyn TitleStore>>> {
    let Some(url) = &config.database_url else {
        warn!("DATABASE_URL not set; catalog endpoints will answer with configuration errors");
        return Ok(None);
    };

    let store = PostgresTitleStore::connect(url, config.database_max_connections)
        .await
        .context("failed to connect to the document store")?;

    sqlx::migrate!("./migrations")
        .run(store.pool())
        .await
        .context("failed to run migrations")?;

    info!("document store connected");
    Ok(Some(Arc::new(store)))
}

fn open_vault(config: &Config) -> anyhow::Result<Option<Arc<BlobVault>>> {
    let Some(root) = &config.blob_root else {
        warn!("BLOB_ROOT not set; the upload endpoint will answer with configuration errors");
        return Ok(None);
    };

    std::fs::create_dir_all(root)
        .with_context(|| format!("failed to create blob root {}", root.display()))?;

    let public_base = Url::parse(&config.blob_public_url)
        .context("BLOB_PUBLIC_URL is not a valid URL")?;
    let vault = BlobVault::local(root, public_base).context("failed to open blob root")?;

    info!(root = %root.display(), "object store ready");
    Ok(Some(Arc::new(vault)))
}
