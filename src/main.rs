#![recursion_limit = "512"]

mod config;
mod error;
mod export;
mod preview;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::ExportConfig;
use crate::error::ExportError;

#[derive(Parser, Debug)]
#[command(name = "site-export", about = "Static export and local preview for the UAE Delivery Express site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every route to static HTML and copy assets.
    Build {
        /// Output directory (overrides `SITE_OUT_DIR`).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Static assets directory (overrides `SITE_ASSETS_DIR`).
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Compiled WASM package directory (overrides `SITE_PKG_DIR`).
        #[arg(long)]
        pkg: Option<PathBuf>,
    },
    /// Serve an exported directory locally.
    Preview {
        /// Directory to serve (overrides `SITE_OUT_DIR`).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Port to listen on (overrides `SITE_PREVIEW_PORT`).
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let cli = Cli::parse();
    match run(cli.command, ExportConfig::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "site-export failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, mut config: ExportConfig) -> Result<(), ExportError> {
    match command {
        Command::Build { out, assets, pkg } => {
            config.out_dir = out.unwrap_or(config.out_dir);
            config.assets_dir = assets.unwrap_or(config.assets_dir);
            config.pkg_dir = pkg.unwrap_or(config.pkg_dir);
            export::build(&config).await.map(|_| ())
        }
        Command::Preview { dir, port } => {
            preview::serve(dir.unwrap_or(config.out_dir), port.unwrap_or(config.preview_port)).await
        }
    }
}
