use crate::model::{PullRequest as ModelPullRequest, Repository as ModelRepository};
use crate::storage::NodeRef;
use async_graphql::{Context, ID, InputObject, Interface, Object, SimpleObject};

use super::schema::lock_state;

/// Anything addressable by a global id.
///
/// Concrete type resolution is decided by the variant, never by inspecting
/// which fields a value happens to carry.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "&ID"))]
pub enum Node {
    Repository(Repository),
    PullRequest(PullRequest),
}

impl From<NodeRef<'_>> for Node {
    fn from(node: NodeRef<'_>) -> Self {
        match node {
            NodeRef::Repository(repo) => Node::Repository(repo.clone().into()),
            NodeRef::PullRequest(pr) => Node::PullRequest(pr.clone().into()),
        }
    }
}

#[derive(Clone)]
pub struct Repository {
    id: ID,
    repo: ModelRepository,
}

impl From<ModelRepository> for Repository {
    fn from(repo: ModelRepository) -> Self {
        Self {
            id: ID(repo.id.clone()),
            repo,
        }
    }
}

#[Object]
impl Repository {
    async fn id(&self) -> &ID {
        &self.id
    }

    async fn name(&self) -> &str {
        &self.repo.name
    }

    async fn name_with_owner(&self) -> &str {
        &self.repo.name_with_owner
    }

    /// Look up one of this repository's pull requests by number
    async fn pull_request(
        &self,
        ctx: &Context<'_>,
        number: i32,
    ) -> async_graphql::Result<PullRequest> {
        let state = lock_state(ctx)?;
        let pr = self.repo.pull_request(&state, number)?;
        Ok(pr.clone().into())
    }

    /// Pull requests of this repository, oldest first
    async fn pull_requests(&self, ctx: &Context<'_>) -> async_graphql::Result<PullRequestConnection> {
        let state = lock_state(ctx)?;
        let nodes: Vec<PullRequest> = self
            .repo
            .pull_requests(&state)
            .into_iter()
            .map(|pr| pr.clone().into())
            .collect();

        Ok(PullRequestConnection {
            total_count: nodes.len(),
            nodes,
        })
    }
}

#[derive(Clone)]
pub struct PullRequest {
    id: ID,
    pr: ModelPullRequest,
}

impl From<ModelPullRequest> for PullRequest {
    fn from(pr: ModelPullRequest) -> Self {
        Self {
            id: ID(pr.id.clone()),
            pr,
        }
    }
}

#[Object]
impl PullRequest {
    async fn id(&self) -> &ID {
        &self.id
    }

    async fn number(&self) -> i32 {
        self.pr.number
    }

    async fn title(&self) -> &str {
        &self.pr.title
    }

    async fn body(&self) -> &str {
        &self.pr.body
    }

    async fn base_ref_name(&self) -> &str {
        &self.pr.base_ref_name
    }

    async fn head_ref_name(&self) -> &str {
        &self.pr.head_ref_name
    }

    async fn url(&self) -> &str {
        &self.pr.url
    }

    async fn repository(&self, ctx: &Context<'_>) -> async_graphql::Result<Repository> {
        let state = lock_state(ctx)?;
        let repo = self.pr.repository(&state)?;
        Ok(repo.clone().into())
    }
}

#[derive(SimpleObject)]
pub struct PullRequestConnection {
    pub nodes: Vec<PullRequest>,
    pub total_count: usize,
}

#[derive(InputObject)]
pub struct UpdatePullRequestInput {
    pub pull_request_id: ID,
    pub title: Option<String>,
    pub base_ref_name: Option<String>,
    pub body: Option<String>,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct UpdatePullRequestPayload {
    pub client_mutation_id: Option<String>,
    pub pull_request: PullRequest,
}

#[derive(InputObject)]
pub struct CreatePullRequestInput {
    pub owner_id: ID,
    pub base_ref_name: String,
    pub head_ref_name: String,
    pub title: String,
    pub body: String,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct CreatePullRequestPayload {
    pub client_mutation_id: Option<String>,
    pub pull_request: PullRequest,
}
