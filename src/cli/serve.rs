//! HTTP server command handler.

use std::net::SocketAddr;

use color_eyre::Result;

use crate::context::Context;
use crate::models::AppTag;
use crate::web;

use super::App;

impl App {
    /// Run the catalogue web server.
    pub async fn run_serve(&self, host: Option<&str>, port: Option<u16>) -> Result<()> {
        tracing::info!("Starting component catalogue server");

        let config = self.load_config()?;
        for app in AppTag::all() {
            match config.apps.root(*app) {
                Some(root) => tracing::info!(app = %app, root = %root.display(), "App root"),
                None => tracing::warn!(app = %app, "No root configured, app will be empty"),
            }
        }

        let host = host.unwrap_or(&config.server.host).to_string();
        let port = port.unwrap_or(config.server.port);

        let router = web::router(Context::new(config));

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e| color_eyre::eyre::eyre!("Invalid address {}:{}: {}", host, port, e))?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to bind to {}: {}", addr, e))?;

        tracing::info!("Component catalogue listening on http://{}", addr);

        axum::serve(listener, router).await.map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            color_eyre::eyre::eyre!("HTTP server error: {}", e)
        })?;

        tracing::info!("HTTP server shutting down");
        Ok(())
    }
}
