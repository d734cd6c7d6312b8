use crate::error::{GitHubError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FakeConfig {
    #[serde(default)]
    pub seed: SeedSettings,
}

/// Initial contents of a fresh store.
///
/// Golden outputs in downstream tests depend on these values, so the defaults
/// must stay fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSettings {
    #[serde(default = "default_repository_id")]
    pub repository_id: String,

    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_first_pull_request_number")]
    pub first_pull_request_number: i32,

    #[serde(default = "default_first_id")]
    pub first_id: u64,

    #[serde(default = "default_web_host")]
    pub web_host: String,
}

fn default_repository_id() -> String {
    "1000".to_string()
}

fn default_owner() -> String {
    "pytorch".to_string()
}

fn default_name() -> String {
    "pytorch".to_string()
}

fn default_first_pull_request_number() -> i32 {
    500
}

fn default_first_id() -> u64 {
    5000
}

fn default_web_host() -> String {
    "github.com".to_string()
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            repository_id: default_repository_id(),
            owner: default_owner(),
            name: default_name(),
            first_pull_request_number: default_first_pull_request_number(),
            first_id: default_first_id(),
            web_host: default_web_host(),
        }
    }
}

impl SeedSettings {
    pub fn name_with_owner(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    fn validate(&self) -> Result<()> {
        if self.owner.is_empty() || self.name.is_empty() {
            return Err(GitHubError::Config(
                "seed owner and name cannot be empty".to_string(),
            ));
        }
        if !(1..i32::MAX).contains(&self.first_pull_request_number) {
            return Err(GitHubError::Config(format!(
                "first_pull_request_number must be between 1 and {}, got {}",
                i32::MAX - 1,
                self.first_pull_request_number
            )));
        }
        // Allocated ids must never collide with the seed repository's id.
        let collides = self
            .repository_id
            .parse::<u64>()
            .is_ok_and(|seed_id| seed_id >= self.first_id);
        if collides {
            return Err(GitHubError::Config(format!(
                "first_id {} must be above the seed repository id {}",
                self.first_id, self.repository_id
            )));
        }
        Ok(())
    }
}

impl FakeConfig {
    /// Loads a config file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FakeConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            _ => {
                return Err(GitHubError::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )));
            }
        };
        config.seed.validate()?;
        Ok(config)
    }
}
