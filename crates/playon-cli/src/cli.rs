use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Send links and media to Kodi
#[derive(Debug, Parser)]
#[command(name = "playon")]
#[command(about = "Send links and media to a Kodi server", long_about = None)]
pub struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one or more URLs on a server
    Play {
        /// Server label or index (defaults to the first server)
        #[arg(short, long)]
        server: Option<String>,
        /// URLs to send; each one is dispatched independently
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Show what would be sent for each URL without sending anything
    Classify {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Manage configured servers
    Servers {
        #[command(subcommand)]
        action: ServerAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ServerAction {
    /// List servers in menu order
    List,
    /// Add a server to the end of the list
    Add {
        label: String,
        host: String,
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(long, requires = "username")]
        password: Option<String>,
    },
    /// Remove a server by label or index
    Remove { server: String },
}
