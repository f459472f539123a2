use std::sync::Arc;

use steward_audit::InMemoryAuditStore;
use steward_http::{build_app, DevIdentityProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    steward_observability::init();

    tracing::warn!("using the dev identity provider and in-memory audit store; not for production");

    let addr = std::env::var("STEWARD_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = build_app(Arc::new(DevIdentityProvider), Arc::new(InMemoryAuditStore::new()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
