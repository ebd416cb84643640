//! CLI module for the component catalogue.
//!
//! Subcommands:
//! - `serve`: Run the catalogue web server
//! - `scan`: Scan every app once and print the catalogue as JSON

mod scan;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use crate::config::Config;

/// Component Catalogue - browse UI components across front-end apps
#[derive(Parser)]
#[command(name = "catalogue")]
#[command(about = "Discover, document and preview UI components across front-end apps")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file, merged over the user and project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the catalogue web server
    Serve {
        /// Host address to bind to (defaults to `server.host`)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to `server.port`)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Scan the configured apps and print the catalogue JSON
    Scan {
        /// Only scan this app (core, account, geargrabber, clavet)
        #[arg(long)]
        app: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Serve { ref host, port } => self.run_serve(host.as_deref(), port).await,
            Command::Scan { ref app, pretty } => self.run_scan(app.as_deref(), pretty).await,
        }
    }

    fn load_config(&self) -> Result<Config> {
        let config = Config::load(self.config.as_deref())?;
        Ok(config)
    }
}
