use std::sync::{Arc, Mutex, MutexGuard};

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::Result;
use crate::model::PullRequest as ModelPullRequest;
use crate::storage::GitHubState;

use super::binding;
use super::types::*;

pub type GitHubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The store as seen by resolvers.
///
/// The lock only exists because schema data has to be `Sync`; callers are
/// still expected to run one request at a time.
pub type SharedState = Arc<Mutex<GitHubState>>;

/// Builds the schema over `state` and checks it against the bundled schema
/// document.
pub fn build_schema(state: SharedState) -> Result<GitHubSchema> {
    let schema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish();

    binding::check(&schema.sdl(), binding::SCHEMA_DOCUMENT)?;
    Ok(schema)
}

pub(super) fn lock_state<'a>(
    ctx: &'a Context<'_>,
) -> async_graphql::Result<MutexGuard<'a, GitHubState>> {
    let state = ctx.data::<SharedState>()?;
    state
        .lock()
        .map_err(|_| async_graphql::Error::new("fake GitHub state was poisoned by a panic"))
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Look up a repository by owner and name
    async fn repository(
        &self,
        ctx: &Context<'_>,
        owner: String,
        name: String,
    ) -> async_graphql::Result<Repository> {
        let state = lock_state(ctx)?;
        let repo = state.repository_by_owner_and_name(&owner, &name)?;
        Ok(repo.clone().into())
    }

    /// Fetch any object by its global id
    async fn node(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Node> {
        let state = lock_state(ctx)?;
        let node = state.node(&id)?;
        Ok(node.into())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Change the title, base branch or body of a pull request
    async fn update_pull_request(
        &self,
        ctx: &Context<'_>,
        input: UpdatePullRequestInput,
    ) -> async_graphql::Result<UpdatePullRequestPayload> {
        let mut state = lock_state(ctx)?;
        let pr = state.pull_request_mut(&input.pull_request_id)?;

        if let Some(title) = input.title {
            pr.title = title;
        }
        if let Some(base_ref_name) = input.base_ref_name {
            pr.base_ref_name = base_ref_name;
        }
        if let Some(body) = input.body {
            pr.body = body;
        }

        tracing::debug!(id = %pr.id, number = pr.number, "Updated pull request");
        Ok(UpdatePullRequestPayload {
            client_mutation_id: input.client_mutation_id,
            pull_request: pr.clone().into(),
        })
    }

    /// Open a new pull request against a repository
    async fn create_pull_request(
        &self,
        ctx: &Context<'_>,
        input: CreatePullRequestInput,
    ) -> async_graphql::Result<CreatePullRequestPayload> {
        let mut state = lock_state(ctx)?;
        // The id is taken even when the owner lookup below fails.
        let id = state.allocate_id();
        let repo = state.repository(&input.owner_id)?.clone();
        let number = state.allocate_number(&repo.id)?;
        let url = state.pull_request_url(&repo, number);

        let pr = state.insert_pull_request(ModelPullRequest {
            id,
            repository_id: repo.id.clone(),
            number,
            title: input.title,
            body: input.body,
            base_ref_name: input.base_ref_name,
            head_ref_name: input.head_ref_name,
            url,
        })?;

        tracing::info!(
            id = %pr.id,
            repository = %repo.name_with_owner,
            number = pr.number,
            "Created pull request"
        );
        Ok(CreatePullRequestPayload {
            client_mutation_id: input.client_mutation_id,
            pull_request: pr.clone().into(),
        })
    }
}
