//! Exporter error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("render {path} failed: {message}")]
    Render { path: String, message: String },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("render request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ExportError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { action, path, source }
    }
}
