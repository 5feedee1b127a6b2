// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the clipfind command-line interface.
//!
//! Two subcommands: `search` to run a query through the search worker the way
//! the app does, and `stats` to see what a dataset file contains and how big
//! its indexes come out.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clipfind",
    about = "Fuzzy search over video transcripts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Engine config file (JSON, any subset of fields)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a transcript dataset
    Search(SearchArgs),

    /// Show what a transcript dataset contains
    Stats {
        /// JSON file with one transcript or an array of them
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// JSON file with one transcript or an array of them
    pub file: PathBuf,

    /// Search query
    pub query: String,

    /// Search every transcript in the file instead of one
    #[arg(long)]
    pub playlist: bool,

    /// Transcript to search in single mode, by id or YouTube id (default: first)
    #[arg(long, value_name = "ID", conflicts_with = "playlist")]
    pub video: Option<String>,

    /// Maximum playlist results (overrides the config file)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Put the best matches last instead of first
    #[arg(long)]
    pub render_up: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "clipfind",
            "-v",
            "search",
            "data.json",
            "rust",
            "--playlist",
            "--limit",
            "20",
        ]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "rust");
                assert!(args.playlist);
                assert_eq!(args.limit, Some(20));
            }
            Commands::Stats { .. } => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn test_video_conflicts_with_playlist() {
        let parsed = Cli::try_parse_from([
            "clipfind",
            "search",
            "d.json",
            "q",
            "--playlist",
            "--video",
            "x",
        ]);
        assert!(parsed.is_err());
    }
}
