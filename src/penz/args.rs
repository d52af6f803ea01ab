use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "penz")]
#[command(about = "Local playground for HTML/CSS/JS snippet pens", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (also settable via PENZ_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    pub no_latency: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List pens, most recently updated first
    #[command(alias = "ls")]
    List,

    /// Show the trending feed (top pens by likes + views)
    #[command(alias = "hot")]
    Trending,

    /// Search pens by title or author
    Search {
        /// Search term
        term: String,
    },

    /// View a pen's sources (records a view)
    #[command(alias = "v")]
    View {
        /// Pen id
        id: String,
    },

    /// Like a pen
    Like {
        /// Pen id
        id: String,
    },

    /// Create a new pen; with no arguments, picks up a stashed fork
    #[command(alias = "n")]
    New {
        /// Title of the pen
        #[arg(required = false)]
        title: Option<String>,

        /// Read the HTML source from a file
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Read the CSS source from a file
        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,

        /// Read the JavaScript source from a file
        #[arg(long, value_name = "FILE")]
        js: Option<PathBuf>,
    },

    /// Update a pen's title or sources
    Update {
        /// Pen id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// Read the HTML source from a file
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Read the CSS source from a file
        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,

        /// Read the JavaScript source from a file
        #[arg(long, value_name = "FILE")]
        js: Option<PathBuf>,
    },

    /// Delete a pen
    #[command(alias = "rm")]
    Delete {
        /// Pen id
        id: String,
    },

    /// Fork a pen (stashes a draft for the next `new`)
    Fork {
        /// Pen id
        id: String,
    },

    /// Compose the preview document for a pen
    Preview {
        /// Pen id
        id: String,

        /// Write the document to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (author, simulate-latency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
