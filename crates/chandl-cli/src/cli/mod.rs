//! CLI for the chandl media grabber.

mod commands;

use anyhow::Result;
use chandl_core::config;
use clap::{Parser, Subcommand};

use commands::{run_grab, run_list};

/// Top-level CLI for the chandl media grabber.
#[derive(Debug, Parser)]
#[command(name = "chandl")]
#[command(about = "chandl: grab imageboard images into a zip archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a page, collect its images, and save them as one zip archive.
    Grab {
        /// Page URL: home feed, thread, or board index.
        url: String,

        /// Archive file name (default: derived from the page, e.g. b_123.zip).
        #[arg(short, long)]
        output: Option<String>,

        /// On a board index, archive only the thread with this id.
        #[arg(long, value_name = "ID")]
        thread: Option<String>,
    },

    /// Resolve and print the full-size image URLs without downloading anything.
    List {
        /// Page URL: home feed, thread, or board index.
        url: String,

        /// On a board index, list only the thread with this id.
        #[arg(long, value_name = "ID")]
        thread: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Grab {
                url,
                output,
                thread,
            } => run_grab(&cfg, &url, output.as_deref(), thread.as_deref())?,
            CliCommand::List { url, thread } => run_list(&cfg, &url, thread.as_deref())?,
        }

        Ok(())
    }
}
