//! # github-fake - an offline stand-in for the GitHub GraphQL API
//!
//! Tests that drive code written against GitHub's v4 API can point it at a
//! [`FakeGitHubEndpoint`] instead. The fake keeps repositories and pull
//! requests in memory, serves a small schema (`schema/github.graphql`) through
//! async-graphql, and hands out ids and pull request numbers
//! deterministically so golden outputs stay stable.
//!
//! ## Quick Start
//!
//! ```no_run
//! use github_fake::FakeGitHubEndpoint;
//! use serde_json::json;
//!
//! let mut github = FakeGitHubEndpoint::new()?;
//! let created = github.execute(
//!     r#"mutation ($input: CreatePullRequestInput!) {
//!         createPullRequest(input: $input) { pullRequest { number url } }
//!     }"#,
//!     json!({ "input": {
//!         "ownerId": "1000", "baseRefName": "main", "headRefName": "feature",
//!         "title": "T", "body": "B",
//!     }}),
//! )?;
//! assert_eq!(created["data"]["createPullRequest"]["pullRequest"]["number"], 500);
//! # Ok::<(), github_fake::GitHubError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Seed data configuration
//! - [`endpoint`]: The query execution facade
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and schema binding
//! - [`model`]: Repository and pull request entities
//! - [`storage`]: The in-memory object graph

/// Command-line interface definitions using clap.
pub mod cli;

/// Seed data configuration.
///
/// Handles `.yml`/`.toml` files overriding the fixed seed repository.
pub mod config;

pub mod endpoint;

/// Error types and result aliases.
///
/// Defines the `GitHubError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Entity model.
///
/// Includes `Repository` and `PullRequest`.
pub mod model;

/// In-memory store, id and number allocation.
pub mod storage;

pub use endpoint::FakeGitHubEndpoint;
pub use error::{GitHubError, Result};
