//! GraphQL schema and resolvers for the fake.
//!
//! ## Schema
//!
//! - **Queries**: `repository(owner, name)`, `node(id)`
//! - **Mutations**: `createPullRequest`, `updatePullRequest`
//! - **Interfaces**: `Node`, implemented by `Repository` and `PullRequest`
//!
//! The resolvers are checked against `schema/github.graphql` whenever a schema
//! is built, see [`binding`].

pub mod binding;
mod schema;
mod types;

pub use schema::{GitHubSchema, MutationRoot, QueryRoot, SharedState, build_schema};
pub use types::*;
