use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "rest-api", version, about = "Product catalogue REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Replace the products collection with the sample catalogue
    Seed,
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}
