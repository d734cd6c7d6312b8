use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-fake")]
#[command(
    author,
    version,
    about = "An in-memory fake of the GitHub GraphQL API for tests"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed configuration file (.yml, .yaml or .toml)
    #[arg(long, global = true, env = "GITHUB_FAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the bound schema as SDL
    Sdl,

    /// Run GraphQL operations, in order, against one fresh fake
    Query {
        /// Query or mutation documents (use '-' to read one from stdin)
        #[arg(required = true)]
        queries: Vec<String>,

        /// Variables as JSON, passed to every operation
        #[arg(long)]
        variables: Option<String>,

        /// Print the store contents after the last operation
        #[arg(long)]
        snapshot: bool,
    },
}
