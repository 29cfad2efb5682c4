use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use megapump::{config, routes, services::feed_ticker, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let settings = config::load();
    settings.validate()?;

    let state = AppState::new(settings.clone()).context("loading templates")?;
    feed_ticker::spawn_feed_ticker(state.clone());

    let host: IpAddr = settings
        .host
        .parse()
        .with_context(|| format!("invalid HOST {:?}", settings.host))?;
    let addr = SocketAddr::from((host, settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, routes::app(state)).await?;
    Ok(())
}
