use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use log::info;
use tokio::net::TcpListener;
use tokio::signal;

use crate::routes::build_router;
use crate::store::QuoteStore;

pub(crate) async fn serve<S: QuoteStore>(addr: SocketAddr, store: Arc<S>) -> anyhow::Result<()> {
    let app = build_router(store);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind HTTP listener {addr}"))?;
    info!("quote-server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP")?;

    info!("quote-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            stream.recv().await;
            info!("received terminate signal, shutting down");
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
