use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use github_fake::cli::handlers::{handle_query, handle_sdl, load_endpoint};
use github_fake::cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    github_fake::logging::init(cli.verbose, cli.log_file);

    let mut endpoint = load_endpoint(cli.config.as_deref())?;
    match cli.command {
        Commands::Sdl => handle_sdl(&endpoint),
        Commands::Query {
            queries,
            variables,
            snapshot,
        } => handle_query(&mut endpoint, queries, variables, snapshot),
    }
}
