use anyhow::Context;

const BIND_ADDR_VAR: &str = "BOXOFFICE_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    boxoffice_observability::init();

    let config = boxoffice_infra::load_config().context("invalid box office configuration")?;
    tracing::info!(
        max_tickets = config.max_tickets_per_purchase,
        adult_price = config.prices.adult,
        child_price = config.prices.child,
        infant_price = config.prices.infant,
        "configuration loaded"
    );

    let services = boxoffice_api::app::services::build_services_from_env(config)?;
    let app = boxoffice_api::app::build_app(services);

    let bind_addr = std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
