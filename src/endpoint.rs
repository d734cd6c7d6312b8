//! The single entry point tests talk to.

use std::sync::{Arc, Mutex, PoisonError};

use async_graphql::{Request, Variables};
use serde_json::{Value, json};

use crate::config::FakeConfig;
use crate::error::{GitHubError, Result};
use crate::graphql::{GitHubSchema, SharedState, build_schema};
use crate::storage::GitHubState;

/// A fake GitHub GraphQL endpoint backed by an in-memory store.
///
/// Every endpoint owns its own store, so independent fakes can live side by
/// side in one test process. Requests take `&mut self`: one request is fully
/// resolved before the next one starts, and sharing an endpoint across
/// threads needs an external lock.
pub struct FakeGitHubEndpoint {
    state: SharedState,
    schema: GitHubSchema,
}

impl FakeGitHubEndpoint {
    /// Creates an endpoint with the default seed data.
    pub fn new() -> Result<Self> {
        Self::with_config(&FakeConfig::default())
    }

    pub fn with_config(config: &FakeConfig) -> Result<Self> {
        let state = Arc::new(Mutex::new(GitHubState::new(&config.seed)));
        let schema = build_schema(state.clone())?;
        Ok(Self { state, schema })
    }

    /// Runs a query or mutation and returns `{"data": ...}`.
    ///
    /// Any GraphQL error, whether raised by a resolver or by validation, fails
    /// the whole call with one error listing every message on its own line.
    ///
    /// Resolvers never suspend, so the request is driven to completion on the
    /// calling thread; this works inside or outside an async runtime.
    pub fn execute(&mut self, query: &str, variables: Value) -> Result<Value> {
        futures::executor::block_on(run(&self.schema, query, variables))
    }

    /// Same as [`execute`](Self::execute), as a future.
    pub async fn execute_async(&mut self, query: &str, variables: Value) -> Result<Value> {
        run(&self.schema, query, variables).await
    }

    /// The bound schema, rendered as SDL.
    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }

    /// Serializes the whole store, counters included.
    pub fn snapshot(&self) -> Result<Value> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(serde_json::to_value(&*state)?)
    }
}

async fn run(schema: &GitHubSchema, query: &str, variables: Value) -> Result<Value> {
    tracing::debug!(query, "Executing GraphQL request");
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        tracing::warn!(errors = messages.len(), "GraphQL request failed");
        return Err(GitHubError::Query(messages.join("\n")));
    }

    let data = response.data.into_json()?;
    Ok(json!({ "data": data }))
}
