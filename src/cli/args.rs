//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve pedigree trees from breeder records
#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(about = "Resolve pedigree trees from breeder records")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the pedigree of one individual
    Resolve {
        /// Id of the individual at the root of the tree
        id: String,

        /// JSON record file or directory of record files
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Base URL of a REST backend (instead of a file store)
        #[arg(long, conflicts_with = "store")]
        url: Option<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Ancestor generations to resolve
        #[arg(short, long)]
        depth: Option<usize>,

        /// Output format (tree, compact, json, mermaid)
        #[arg(short, long)]
        format: Option<String>,

        /// Resolve sire and dam branches one after the other
        #[arg(long)]
        sequential: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Audit a record store for ancestry cycles and broken links
    Check {
        /// JSON record file or directory of record files
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
