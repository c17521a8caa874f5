use crate::source::IndexSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docs-search")]
#[command(about = "Build and query the documentation site's search index", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./docs-search.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect the content collections and write the index artifact
    Build {
        #[arg(short = 'r', long)]
        content_root: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run one query and print the grouped results
    Query {
        term: String,
        /// Index artifact path or URL
        #[arg(short, long)]
        index: Option<IndexSource>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Require every query word to match and disable fuzzy expansion
        #[arg(long)]
        no_suggest: bool,
    },
    /// Read terms from stdin, one per line, printing results as you type
    Interactive {
        #[arg(short, long)]
        index: Option<IndexSource>,
    },
}
