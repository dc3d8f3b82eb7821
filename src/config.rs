//! Exporter settings parsed from environment variables.
//!
//! `main` loads an optional `.env` first, so values there count as
//! environment. Command-line flags override whatever is resolved here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const DEFAULT_PKG_DIR: &str = "target/site/pkg";
pub const DEFAULT_PREVIEW_PORT: u16 = 3000;
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Root of the exported site.
    pub out_dir: PathBuf,
    /// Static files copied verbatim into the output root.
    pub assets_dir: PathBuf,
    /// Compiled WASM package; copied to `<out>/pkg` when present.
    pub pkg_dir: PathBuf,
    pub preview_port: u16,
    /// Manifest carrying the `[package.metadata.leptos]` section.
    pub manifest: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            pkg_dir: PathBuf::from(DEFAULT_PKG_DIR),
            preview_port: DEFAULT_PREVIEW_PORT,
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }
}

impl ExportConfig {
    /// Read settings from the environment.
    ///
    /// Optional:
    /// - `SITE_OUT_DIR`: default `dist`
    /// - `SITE_ASSETS_DIR`: default `public`
    /// - `SITE_PKG_DIR`: default `target/site/pkg`
    /// - `SITE_PREVIEW_PORT`: default 3000; unparsable values fall back
    /// - `SITE_MANIFEST`: default `Cargo.toml`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            out_dir: env_path("SITE_OUT_DIR", DEFAULT_OUT_DIR),
            assets_dir: env_path("SITE_ASSETS_DIR", DEFAULT_ASSETS_DIR),
            pkg_dir: env_path("SITE_PKG_DIR", DEFAULT_PKG_DIR),
            preview_port: env_parse("SITE_PREVIEW_PORT", DEFAULT_PREVIEW_PORT),
            manifest: env_path("SITE_MANIFEST", DEFAULT_MANIFEST),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}
