use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::container::Container;
use super::router::build_router;

/// Bind the control panel and serve it until ctrl-c.
pub async fn serve(container: Arc<Container>, host: &str, port: u16) -> Result<()> {
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            signal_token.cancel();
        }
    });

    serve_with_shutdown(container, host, port, shutdown).await
}

/// Like `serve`, but shutdown is driven by `shutdown` instead of ctrl-c.
///
/// Once the token fires, children the launcher still owns are stopped before
/// this returns. Nothing launched through the panel outlives it.
pub async fn serve_with_shutdown(
    container: Arc<Container>,
    host: &str,
    port: u16,
    shutdown: CancellationToken,
) -> Result<()> {
    let router = build_router(container.clone());
    let listener = TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;

    info!("Control panel listening on http://{}", addr);
    info!("Launch target URL: {}", container.app_url());

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    let stopped = container.stop_use_case().execute().await;
    if stopped > 0 {
        info!("Stopped {} launch(es) on shutdown", stopped);
    }

    Ok(())
}
