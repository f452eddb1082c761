//! CLI for framegrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use framegrab_core::animator::DEFAULT_FRAMERATE;
use framegrab_core::config;
use std::path::PathBuf;

use commands::{run_animate, run_completions, run_fetch, run_jobs, run_named_jobs, AnimateArgs};

/// Top-level CLI for framegrab.
#[derive(Debug, Parser)]
#[command(name = "framegrab")]
#[command(about = "framegrab: download the images on a listing page and encode them as a video", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every image linked from a listing page.
    Fetch {
        /// Directory-listing URL.
        base_url: String,
        /// Destination folder (created if missing).
        destination: PathBuf,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Download the images and encode them into a video.
    Animate {
        /// Directory-listing URL.
        base_url: String,
        /// Destination folder (created if missing).
        destination: PathBuf,
        /// Output file name inside the destination folder.
        #[arg(long, short, default_value = "animation.mp4")]
        output: String,
        /// Input frame rate.
        #[arg(long, default_value_t = DEFAULT_FRAMERATE)]
        framerate: u32,
        /// Seconds to hold the last frame (0 = no hold).
        #[arg(long, default_value_t = 0, value_name = "SECS")]
        hold_last_frame: u32,
    },

    /// Run jobs from the config file (all jobs when no name is given).
    Run {
        /// Job names as listed by `framegrab jobs`.
        names: Vec<String>,
    },

    /// List jobs defined in the config file.
    Jobs,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        match cli.command {
            // Completions need neither config nor network.
            CliCommand::Completions { shell } => run_completions(shell),
            command => command.run_with_config().await,
        }
    }

    async fn run_with_config(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self {
            CliCommand::Fetch {
                base_url,
                destination,
                json,
            } => run_fetch(&cfg, base_url, destination, json).await?,
            CliCommand::Animate {
                base_url,
                destination,
                output,
                framerate,
                hold_last_frame,
            } => {
                let args = AnimateArgs {
                    base_url,
                    destination,
                    output,
                    framerate,
                    hold_last_frame,
                };
                run_animate(&cfg, args).await?;
            }
            CliCommand::Run { names } => run_named_jobs(&cfg, &names).await?,
            CliCommand::Jobs => run_jobs(&cfg),
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
