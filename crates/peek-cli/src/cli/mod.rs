//! CLI for Peek link previews.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use peek_core::config::{self, DocViewer};
use std::path::PathBuf;

use commands::{run_check, run_completions, run_man, run_scan, run_settings};

/// Top-level CLI for Peek.
#[derive(Debug, Parser)]
#[command(name = "peek")]
#[command(about = "Peek: hover previews for media and document links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Document viewer choices for `peek settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewerArg {
    Google,
}

impl From<ViewerArg> for DocViewer {
    fn from(v: ViewerArg) -> Self {
        match v {
            ViewerArg::Google => DocViewer::Google,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan a saved HTML page and list the previews it would get.
    Scan {
        /// HTML file to scan, or `-` for stdin.
        path: PathBuf,

        /// URL the page was served from (resolves relative links, decides mixed content).
        #[arg(long, value_name = "URL")]
        page_url: String,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,

        /// Write badge messages to stderr as JSON lines.
        #[arg(long)]
        badge_messages: bool,
    },

    /// Classify and normalize a single link, once per category it matches.
    Check {
        /// Link href as it appears in the page.
        href: String,

        /// URL of the page containing the link.
        #[arg(long, value_name = "URL")]
        page_url: String,
    },

    /// Show or change preferences.
    Settings {
        /// Viewer used for hosted documents.
        #[arg(long, value_enum)]
        doc_viewer: Option<ViewerArg>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Scan {
                path,
                page_url,
                json,
                badge_messages,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_scan(&cfg, &path, &page_url, json, badge_messages)?;
            }
            CliCommand::Check { href, page_url } => {
                let cfg = config::load_or_init()?;
                run_check(&cfg, &href, &page_url)?;
            }
            CliCommand::Settings { doc_viewer } => {
                let cfg = config::load_or_init()?;
                run_settings(cfg, doc_viewer.map(DocViewer::from))?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
