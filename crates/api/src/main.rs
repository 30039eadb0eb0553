use anyhow::Context;

use dealership_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dealership_observability::init();

    let cfg = ApiConfig::from_env();
    let app = dealership_api::app::connect_app(&cfg).await?;

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
