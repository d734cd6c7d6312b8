mod query;
mod sdl;

pub use query::handle_query;
pub use sdl::handle_sdl;

use crate::FakeGitHubEndpoint;
use crate::config::FakeConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Builds an endpoint from the optional seed configuration file.
pub fn load_endpoint(config: Option<&Path>) -> Result<FakeGitHubEndpoint> {
    let config = match config {
        Some(path) => FakeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FakeConfig::default(),
    };
    FakeGitHubEndpoint::with_config(&config).context("Failed to build the fake GitHub schema")
}
