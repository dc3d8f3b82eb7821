//! Static export of every site route.
//!
//! Output layout:
//! - `<out>/index.html`, `<out>/<route>/index.html` for each route
//! - `<out>/404.html` rendered from the not-found view
//! - the assets directory copied verbatim into `<out>/`
//! - the compiled WASM package copied to `<out>/pkg/` when it exists
//!
//! Existing files in `<out>` are overwritten, never deleted.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::fs;
use std::path::{Path, PathBuf};

use client::routes::SiteRoute;
use tracing::{info, warn};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::render::{Renderer, load_options};

/// Path requested to render the not-found view; it matches no route.
pub const NOT_FOUND_PROBE: &str = "/__not-found__";
pub const NOT_FOUND_FILE: &str = "404.html";

/// One document to render and where it lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPage {
    /// Request path passed to the SSR router.
    pub request_path: String,
    /// Destination relative to the output root.
    pub file: PathBuf,
    /// Whether anything but `200 OK` is a failure.
    pub must_succeed: bool,
}

/// All pages in export order: every route, then the not-found page.
#[must_use]
pub fn plan() -> Vec<ExportPage> {
    SiteRoute::ALL
        .iter()
        .map(|route| ExportPage {
            request_path: format!("/{}", route.segment()),
            file: PathBuf::from(route.export_file()),
            must_succeed: true,
        })
        .chain(std::iter::once(ExportPage {
            request_path: NOT_FOUND_PROBE.to_owned(),
            file: PathBuf::from(NOT_FOUND_FILE),
            must_succeed: false,
        }))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
    pub pkg_files: usize,
}

/// Render and write the whole site to `config.out_dir`.
///
/// # Errors
///
/// Returns [`ExportError`] on configuration, render, or filesystem failure.
pub async fn build(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    let options = load_options(&config.manifest)?;
    let out = &config.out_dir;
    fs::create_dir_all(out).map_err(ExportError::io("create", out))?;

    let mut summary = ExportSummary::default();
    if config.assets_dir.is_dir() {
        summary.assets = copy_dir(&config.assets_dir, out)?;
    } else {
        warn!(dir = %config.assets_dir.display(), "assets directory not found; skipping");
    }
    if config.pkg_dir.is_dir() {
        summary.pkg_files = copy_dir(&config.pkg_dir, &out.join(&*options.site_pkg_dir))?;
    } else {
        warn!(dir = %config.pkg_dir.display(), "wasm package not found; pages will not hydrate");
    }

    let renderer = Renderer::start(options).await?;
    for page in plan() {
        let rendered = renderer.render(&page.request_path).await?;
        if page.must_succeed && rendered.status != 200 {
            return Err(ExportError::Render {
                path: page.request_path,
                message: format!("unexpected status {}", rendered.status),
            });
        }
        let written = write_page(out, &page.file, &rendered.html)?;
        info!(path = %page.request_path, file = %written.display(), "page exported");
        summary.pages += 1;
    }

    info!(
        out = %out.display(),
        pages = summary.pages,
        assets = summary.assets,
        pkg_files = summary.pkg_files,
        "export complete"
    );
    Ok(summary)
}

/// Write `html` to `root/file`, creating parent directories.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when a directory or the file cannot be written.
pub fn write_page(root: &Path, file: &Path, html: &str) -> Result<PathBuf, ExportError> {
    let dest = root.join(file);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(ExportError::io("create", parent))?;
    }
    fs::write(&dest, html).map_err(ExportError::io("write", &dest))?;
    Ok(dest)
}

/// Recursively copy `src` into `dst`. Returns the number of files copied.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on the first read, create, or copy failure.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize, ExportError> {
    fs::create_dir_all(dst).map_err(ExportError::io("create", dst))?;
    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(ExportError::io("read", src))? {
        let entry = entry.map_err(ExportError::io("read", src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(ExportError::io("copy", &from))?;
            copied += 1;
        }
    }
    Ok(copied)
}
