pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quickfeed")]
#[command(about = "Categorized news with on-demand summaries", long_about = None)]
pub struct Cli {
    /// Number of categories fetched concurrently (overrides the config file)
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    /// Root URL of the news service (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to an alternative config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the categories offered by the service
    Categories,
    /// Fetch every category and print the articles
    News {
        /// Only print this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Print the summary of an article
    Summary {
        /// Link of the article
        link: String,
    },
    /// Print the meaning of a word
    Define {
        /// Word to look up; surrounding punctuation is ignored
        word: String,
    },
    /// Launch the TUI
    Tui,
}
