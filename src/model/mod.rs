//! Entity model for the fake.
//!
//! - [`Repository`]: a repository, owner of pull requests
//! - [`PullRequest`]: a pull request, pointing back at its repository by id
//!
//! Both kinds share one identifier namespace (the GraphQL `Node` id). The
//! repository/pull request relationship is stored only on the pull request
//! side; a repository's pull requests are found by scanning the store.

mod pull_request;
mod repository;

pub use pull_request::PullRequest;
pub use repository::Repository;
