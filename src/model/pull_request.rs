use crate::error::{GitHubError, Result};
use crate::storage::GitHubState;
use serde::Serialize;

use super::Repository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    pub id: String,

    /// Owning repository. Only ever used for lookups through the store.
    pub repository_id: String,

    pub number: i32,
    pub title: String,
    pub body: String,
    pub base_ref_name: String,
    pub head_ref_name: String,
    pub url: String,
}

impl PullRequest {
    pub fn repository<'s>(&self, state: &'s GitHubState) -> Result<&'s Repository> {
        state
            .repository(&self.repository_id)
            .map_err(|_| GitHubError::DanglingRepository {
                pull_request: self.id.clone(),
                repository: self.repository_id.clone(),
            })
    }
}
