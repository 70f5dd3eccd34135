//! CLI for the shelf cover resolver and extension list.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shelf_core::config;
use std::path::PathBuf;

use commands::{run_cover, run_cover_path, run_extensions, CoverArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(about = "shelf: manga cover cache and extension list tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve and load a cover through the cover cache.
    Cover {
        /// Thumbnail URL of the manga.
        url: String,
        /// Source id whose headers are sent with the request.
        #[arg(long)]
        source: i64,
        /// Treat the manga as a library favorite (cover is written to disk).
        #[arg(long)]
        favorite: bool,
        #[arg(long, default_value = "0")]
        width: u32,
        #[arg(long, default_value = "0")]
        height: u32,
        /// Also copy the loaded bytes to this file.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Print the cover cache file for a thumbnail URL.
    CoverPath {
        /// Thumbnail URL.
        url: String,
    },

    /// Render extension rows from a JSON file of extension items.
    Extensions {
        /// Path to a JSON array of extension items.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Cover {
                url,
                source,
                favorite,
                width,
                height,
                out,
            } => {
                let args = CoverArgs {
                    url,
                    source,
                    favorite,
                    width,
                    height,
                    out,
                };
                run_cover(&cfg, args).await?
            }
            CliCommand::CoverPath { url } => run_cover_path(&cfg, &url)?,
            CliCommand::Extensions { path } => run_extensions(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
