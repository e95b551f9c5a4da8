//! CLI for the tcdn URL rewriter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tcdn_core::config;
use tcdn_core::hooks::Phase;

use commands::{run_check, run_config_path, run_html, run_rewrite, run_thumbnail, run_uploads};

/// Top-level CLI for the tcdn origin-pull CDN URL rewriter.
#[derive(Debug, Parser)]
#[command(name = "tcdn")]
#[command(about = "tcdn: rewrite asset URLs to an origin-pull CDN", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite a URL (includes and content prefixes).
    Rewrite {
        /// URL to rewrite.
        url: String,
        /// Use the early-phase exclusion pattern.
        #[arg(long)]
        early: bool,
    },

    /// Rewrite only the content prefix of a URL.
    RewriteContent {
        /// URL to rewrite.
        url: String,
        /// Use the early-phase exclusion pattern.
        #[arg(long)]
        early: bool,
    },

    /// Rewrite editor-inserted <img> tags in an HTML fragment.
    Html {
        /// Path to the HTML file, or "-" to read stdin.
        path: PathBuf,
    },

    /// Rewrite the public URLs of an upload-dir JSON document.
    Uploads {
        /// Path to the JSON file, or "-" to read stdin.
        path: PathBuf,
    },

    /// Rewrite the src of an attachment-image JSON document.
    Thumbnail {
        /// Path to the JSON file, or "-" to read stdin.
        path: PathBuf,
    },

    /// Report whether a URL is excluded from rewriting.
    Check {
        /// URL to check.
        url: String,
        /// Use the early-phase exclusion pattern.
        #[arg(long)]
        early: bool,
    },

    /// Print the config file path, creating a default config if missing.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Rewrite { url, early } => run_rewrite(&cfg, &url, phase(early), true)?,
            CliCommand::RewriteContent { url, early } => {
                run_rewrite(&cfg, &url, phase(early), false)?;
            }
            CliCommand::Html { path } => run_html(&cfg, &path)?,
            CliCommand::Uploads { path } => run_uploads(&cfg, &path)?,
            CliCommand::Thumbnail { path } => run_thumbnail(&cfg, &path)?,
            CliCommand::Check { url, early } => run_check(&cfg, &url, phase(early))?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

fn phase(early: bool) -> Phase {
    if early {
        Phase::Early
    } else {
        Phase::Template
    }
}

#[cfg(test)]
mod tests;
