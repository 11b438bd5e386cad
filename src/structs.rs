use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the tracker.
    Serve,

    /// Share a file through the tracker.
    Upload {
        path: PathBuf,

        /// Name to publish the file under; defaults to the file name.
        #[arg(long)]
        name: Option<String>,
    },

    /// Fetch a file by name.
    Download {
        name: String,

        #[arg(long, short)]
        output: PathBuf,
    },
}
