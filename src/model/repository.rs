use crate::error::{GitHubError, Result};
use crate::storage::GitHubState;
use serde::Serialize;

use super::PullRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub name_with_owner: String,
}

impl Repository {
    pub fn new(id: String, owner: &str, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            name_with_owner: format!("{}/{}", owner, name),
        }
    }

    /// Finds the pull request with `number` among those owned by this repository.
    pub fn pull_request<'s>(&self, state: &'s GitHubState, number: i32) -> Result<&'s PullRequest> {
        state
            .pull_requests()
            .find(|pr| pr.repository_id == self.id && pr.number == number)
            .ok_or_else(|| GitHubError::UnknownPullRequest {
                number,
                repository: self.name_with_owner.clone(),
            })
    }

    /// Pull requests owned by this repository, in creation order.
    pub fn pull_requests<'s>(&self, state: &'s GitHubState) -> Vec<&'s PullRequest> {
        state
            .pull_requests()
            .filter(|pr| pr.repository_id == self.id)
            .collect()
    }
}
