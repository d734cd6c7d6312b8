use crate::FakeGitHubEndpoint;
use anyhow::Result;

pub fn handle_sdl(endpoint: &FakeGitHubEndpoint) -> Result<()> {
    println!("{}", endpoint.sdl());
    Ok(())
}
