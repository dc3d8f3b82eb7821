//! Local preview server for an exported site.
//!
//! Serves files with directory-index resolution; anything missing gets the
//! exported `404.html` with a `404` status. Every request is traced.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

use crate::error::ExportError;
use crate::export::NOT_FOUND_FILE;

/// Static file router over `dir`.
pub fn preview_router(dir: &Path) -> Router {
    let not_found = SetStatus::new(ServeFile::new(dir.join(NOT_FOUND_FILE)), StatusCode::NOT_FOUND);
    let files = ServeDir::new(dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    Router::new().fallback_service(files).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Serve `dir` on `127.0.0.1:port` until the process is stopped.
///
/// # Errors
///
/// Returns [`ExportError::Serve`] when binding or serving fails.
pub async fn serve(dir: PathBuf, port: u16) -> Result<(), ExportError> {
    if !dir.join("index.html").is_file() {
        warn!(dir = %dir.display(), "no index.html found; run `site-export build` first");
    }
    let listener = TcpListener::bind(("127.0.0.1", port)).await.map_err(ExportError::Serve)?;
    info!(%port, dir = %dir.display(), "preview listening");
    serve_on(listener, &dir).await
}

pub(crate) async fn serve_on(listener: TcpListener, dir: &Path) -> Result<(), ExportError> {
    axum::serve(listener, preview_router(dir)).await.map_err(ExportError::Serve)
}
