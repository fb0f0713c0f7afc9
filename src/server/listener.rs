use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::AppContext;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    match cfg.files.directory.as_deref() {
        Some(dir) => info!("Serving files from {}", dir.display()),
        None => tracing::warn!("No file directory configured, /files/ routes will fail"),
    }

    serve(listener, Arc::new(AppContext::from_config(cfg))).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, ctx: Arc<AppContext>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Error accepting connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer, ctx);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
