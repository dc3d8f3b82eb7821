//! Server-side rendering of site routes.
//!
//! DESIGN
//! ======
//! Pages are rendered by the same Leptos/axum integration a live server
//! would use: the SSR router is bound to an ephemeral loopback port and each
//! route is fetched over HTTP. Head metadata injection, streaming, and route
//! matching therefore behave exactly as in production.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::path::Path;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::error::ExportError;

/// Load `[package.metadata.leptos]` from `manifest`.
///
/// # Errors
///
/// Returns [`ExportError::Config`] when the manifest is missing or malformed.
pub fn load_options(manifest: &Path) -> Result<LeptosOptions, ExportError> {
    let manifest = manifest
        .to_str()
        .ok_or_else(|| ExportError::Config(format!("non-UTF-8 manifest path {}", manifest.display())))?;
    let conf = get_configuration(Some(manifest)).map_err(|e| ExportError::Config(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Leptos SSR router. Unknown paths render the app's not-found view.
pub fn ssr_router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let fallback = leptos_axum::render_app_to_stream({
        let opts = options.clone();
        move || client::app::shell(opts.clone())
    });

    Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(fallback)
        .with_state(options)
}

/// Rendered document plus the status the app answered with.
#[derive(Debug)]
pub struct RenderedPage {
    pub status: u16,
    pub html: String,
}

/// Loopback SSR server. Dropping it stops the server.
pub struct Renderer {
    base_url: String,
    client: reqwest::Client,
    server: JoinHandle<()>,
}

impl Renderer {
    /// Bind the SSR router to `127.0.0.1:0` and start serving.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serve`] when the listener cannot be bound.
    pub async fn start(options: LeptosOptions) -> Result<Self, ExportError> {
        let listener = TcpListener::bind("127.0.0.1:0").await.map_err(ExportError::Serve)?;
        let addr = listener.local_addr().map_err(ExportError::Serve)?;
        let app = ssr_router(options);
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "render server stopped");
            }
        });
        tracing::debug!(%addr, "render server listening");

        Ok(Self { base_url: format!("http://{addr}"), client: reqwest::Client::new(), server })
    }

    /// Fetch the rendered document for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] on transport failure and
    /// [`ExportError::Render`] when the app answers with a server error.
    pub async fn render(&self, path: &str) -> Result<RenderedPage, ExportError> {
        let response = self.client.get(format!("{}{path}", self.base_url)).send().await?;
        let status = response.status();
        let html = response.text().await?;
        if status.is_server_error() {
            return Err(ExportError::Render { path: path.to_owned(), message: format!("status {status}") });
        }
        Ok(RenderedPage { status: status.as_u16(), html })
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.server.abort();
    }
}
