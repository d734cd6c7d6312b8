use crate::error::{GitHubError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Hands out process-wide object ids.
///
/// Ids are decimal strings counted up from a fixed start so that golden
/// outputs stay stable across runs.
#[derive(Debug, Clone, Serialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> String {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}

/// Per-repository pull request numbering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NumberAllocator {
    next: HashMap<String, i32>,
}

impl NumberAllocator {
    pub fn seed(&mut self, repository_id: &str, first: i32) {
        self.next.insert(repository_id.to_string(), first);
    }

    /// Returns the next number for `repository_id`.
    ///
    /// Fails once the counter cannot advance past `i32::MAX`; the counter is
    /// left where it was.
    ///
    /// # Panics
    ///
    /// If the repository was never seeded. That only happens when the store
    /// was assembled incorrectly, so there is nothing sensible to recover to.
    pub fn allocate(&mut self, repository_id: &str) -> Result<i32> {
        let next = self.next.get_mut(repository_id).unwrap_or_else(|| {
            panic!("pull request numbering was never seeded for repository {repository_id}")
        });
        let number = *next;
        *next = number
            .checked_add(1)
            .ok_or_else(|| GitHubError::NumbersExhausted(repository_id.to_string()))?;
        Ok(number)
    }
}
