use super::sequence::{IdAllocator, NumberAllocator};
use crate::{
    config::SeedSettings,
    error::{GitHubError, Result},
    model::{PullRequest, Repository},
};
use serde::Serialize;
use std::collections::HashMap;

/// Where an id lives in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Repository(usize),
    PullRequest(usize),
}

/// A borrowed entity of either kind, as returned by a `Node` lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Repository(&'a Repository),
    PullRequest(&'a PullRequest),
}

/// The fake's database.
///
/// Entities are kept in insertion order, which is also creation order. A
/// single id index spans both kinds so no id can be handed out twice.
#[derive(Debug, Serialize)]
pub struct GitHubState {
    repositories: Vec<Repository>,
    pull_requests: Vec<PullRequest>,
    #[serde(skip)]
    index: HashMap<String, Slot>,
    ids: IdAllocator,
    numbers: NumberAllocator,
    web_host: String,
}

impl Default for GitHubState {
    fn default() -> Self {
        Self::new(&SeedSettings::default())
    }
}

impl GitHubState {
    /// Creates a store holding only the seed repository.
    pub fn new(seed: &SeedSettings) -> Self {
        let mut state = Self::empty(seed.first_id, &seed.web_host);
        state.register_repository(
            Repository::new(seed.repository_id.clone(), &seed.owner, &seed.name),
            seed.first_pull_request_number,
        );
        tracing::debug!(
            repository = %seed.name_with_owner(),
            first_number = seed.first_pull_request_number,
            first_id = seed.first_id,
            "Seeded fake GitHub state"
        );
        state
    }

    /// Creates a store with no repositories at all.
    pub fn empty(first_id: u64, web_host: &str) -> Self {
        Self {
            repositories: Vec::new(),
            pull_requests: Vec::new(),
            index: HashMap::new(),
            ids: IdAllocator::starting_at(first_id),
            numbers: NumberAllocator::default(),
            web_host: web_host.to_string(),
        }
    }

    pub fn allocate_id(&mut self) -> String {
        self.ids.allocate()
    }

    /// Next pull request number for a repository.
    ///
    /// Fails with [`GitHubError::NumbersExhausted`] once the numbering would
    /// pass `i32::MAX`.
    ///
    /// # Panics
    ///
    /// If `repository_id` was not registered through [`insert_repository`](Self::insert_repository).
    pub fn allocate_number(&mut self, repository_id: &str) -> Result<i32> {
        self.numbers.allocate(repository_id)
    }

    /// Registers a repository and seeds its pull request numbering.
    pub fn insert_repository(&mut self, repo: Repository, first_number: i32) -> Result<()> {
        if self.index.contains_key(&repo.id) {
            return Err(GitHubError::DuplicateId(repo.id));
        }
        self.register_repository(repo, first_number);
        Ok(())
    }

    fn register_repository(&mut self, repo: Repository, first_number: i32) {
        self.numbers.seed(&repo.id, first_number);
        self.index
            .insert(repo.id.clone(), Slot::Repository(self.repositories.len()));
        self.repositories.push(repo);
    }

    pub fn insert_pull_request(&mut self, pr: PullRequest) -> Result<&PullRequest> {
        if self.index.contains_key(&pr.id) {
            return Err(GitHubError::DuplicateId(pr.id));
        }
        pr.repository(self)?;
        let pos = self.pull_requests.len();
        self.index.insert(pr.id.clone(), Slot::PullRequest(pos));
        self.pull_requests.push(pr);
        Ok(&self.pull_requests[pos])
    }

    pub fn repository(&self, id: &str) -> Result<&Repository> {
        match self.index.get(id) {
            Some(Slot::Repository(pos)) => Ok(&self.repositories[*pos]),
            _ => Err(GitHubError::UnknownId(id.to_string())),
        }
    }

    pub fn pull_request(&self, id: &str) -> Result<&PullRequest> {
        match self.index.get(id) {
            Some(Slot::PullRequest(pos)) => Ok(&self.pull_requests[*pos]),
            _ => Err(GitHubError::UnknownId(id.to_string())),
        }
    }

    pub fn pull_request_mut(&mut self, id: &str) -> Result<&mut PullRequest> {
        match self.index.get(id) {
            Some(Slot::PullRequest(pos)) => Ok(&mut self.pull_requests[*pos]),
            _ => Err(GitHubError::UnknownId(id.to_string())),
        }
    }

    /// Looks up an id regardless of which kind of entity it names.
    pub fn node(&self, id: &str) -> Result<NodeRef<'_>> {
        match self.index.get(id) {
            Some(Slot::Repository(pos)) => Ok(NodeRef::Repository(&self.repositories[*pos])),
            Some(Slot::PullRequest(pos)) => Ok(NodeRef::PullRequest(&self.pull_requests[*pos])),
            None => Err(GitHubError::UnknownId(id.to_string())),
        }
    }

    pub fn repository_by_owner_and_name(&self, owner: &str, name: &str) -> Result<&Repository> {
        let name_with_owner = format!("{}/{}", owner, name);
        self.repositories
            .iter()
            .find(|r| r.name_with_owner == name_with_owner)
            .ok_or(GitHubError::UnknownRepository(name_with_owner))
    }

    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter()
    }

    /// All pull requests, in creation order.
    pub fn pull_requests(&self) -> impl Iterator<Item = &PullRequest> {
        self.pull_requests.iter()
    }

    /// Web url GitHub would show for pull request `number` of `repo`.
    pub fn pull_request_url(&self, repo: &Repository, number: i32) -> String {
        format!(
            "https://{}/{}/pull/{}",
            self.web_host, repo.name_with_owner, number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_request(state: &mut GitHubState, repository_id: &str, title: &str) -> PullRequest {
        let id = state.allocate_id();
        let number = state.allocate_number(repository_id).unwrap();
        PullRequest {
            id,
            repository_id: repository_id.to_string(),
            number,
            title: title.to_string(),
            body: String::new(),
            base_ref_name: "main".to_string(),
            head_ref_name: "feature".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn test_default_state_holds_seed_repository() {
        let state = GitHubState::default();
        let repo = state.repository("1000").unwrap();
        assert_eq!(repo.name, "pytorch");
        assert_eq!(repo.name_with_owner, "pytorch/pytorch");
        assert_eq!(state.repositories().count(), 1);
        assert_eq!(state.pull_requests().count(), 0);
    }

    #[test]
    fn test_seed_repository_is_fully_registered() {
        let mut state = GitHubState::default();

        assert!(matches!(state.node("1000"), Ok(NodeRef::Repository(r)) if r.name == "pytorch"));
        assert_eq!(state.allocate_number("1000").unwrap(), 500);

        let clash = Repository::new("1000".to_string(), "pytorch", "pytorch");
        assert!(matches!(
            state.insert_repository(clash, 1),
            Err(GitHubError::DuplicateId(id)) if id == "1000"
        ));
        assert_eq!(state.repositories().count(), 1);
    }

    #[test]
    fn test_lookup_by_owner_and_name() {
        let state = GitHubState::default();
        assert_eq!(
            state.repository_by_owner_and_name("pytorch", "pytorch").unwrap().id,
            "1000"
        );

        let err = state
            .repository_by_owner_and_name("pytorch", "vision")
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown repository pytorch/vision");
    }

    #[test]
    fn test_lookups_do_not_cross_kinds() {
        let mut state = GitHubState::default();
        let pr = pull_request(&mut state, "1000", "T");
        state.insert_pull_request(pr).unwrap();

        assert!(state.pull_request("1000").is_err());
        assert!(state.repository("5000").is_err());
        assert!(matches!(state.node("1000"), Ok(NodeRef::Repository(_))));
        assert!(matches!(state.node("5000"), Ok(NodeRef::PullRequest(_))));
    }

    #[test]
    fn test_unknown_node_names_the_id() {
        let state = GitHubState::default();
        let err = state.node("9999").unwrap_err();
        assert_eq!(err.to_string(), "unknown id 9999");
    }

    #[test]
    fn test_duplicate_ids_are_rejected_across_kinds() {
        let mut state = GitHubState::default();
        let mut pr = pull_request(&mut state, "1000", "T");
        pr.id = "1000".to_string();

        assert!(matches!(
            state.insert_pull_request(pr),
            Err(GitHubError::DuplicateId(id)) if id == "1000"
        ));

        let again = Repository::new("1000".to_string(), "pytorch", "vision");
        assert!(state.insert_repository(again, 1).is_err());
    }

    #[test]
    fn test_repository_pull_requests_in_creation_order() {
        let mut state = GitHubState::default();
        state
            .insert_repository(Repository::new("2000".to_string(), "pytorch", "vision"), 1)
            .unwrap();

        for (repo_id, title) in [("1000", "a"), ("2000", "b"), ("1000", "c")] {
            let pr = pull_request(&mut state, repo_id, title);
            state.insert_pull_request(pr).unwrap();
        }

        let repo = state.repository("1000").unwrap();
        let titles: Vec<_> = repo
            .pull_requests(&state)
            .iter()
            .map(|pr| pr.title.as_str())
            .collect();
        assert_eq!(titles, ["a", "c"]);

        assert_eq!(repo.pull_request(&state, 501).unwrap().title, "c");
        let vision = state.repository("2000").unwrap();
        assert_eq!(vision.pull_request(&state, 1).unwrap().title, "b");
    }

    #[test]
    fn test_unknown_pull_request_number_names_repository() {
        let state = GitHubState::default();
        let repo = state.repository("1000").unwrap();
        let err = repo.pull_request(&state, 42).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized pull request #42 in repository pytorch/pytorch"
        );
    }

    #[test]
    fn test_dangling_repository_reference_is_an_error() {
        let mut state = GitHubState::default();
        let mut pr = pull_request(&mut state, "1000", "T");
        pr.repository_id = "4242".to_string();

        assert!(matches!(
            pr.repository(&state),
            Err(GitHubError::DanglingRepository { .. })
        ));
        assert!(state.insert_pull_request(pr).is_err());
        assert_eq!(state.pull_requests().count(), 0);
    }

    #[test]
    fn test_pull_request_url_uses_full_name() {
        let state = GitHubState::default();
        let repo = state.repository("1000").unwrap();
        assert_eq!(
            state.pull_request_url(repo, 500),
            "https://github.com/pytorch/pytorch/pull/500"
        );
    }

    #[test]
    fn test_custom_seed() {
        let seed = SeedSettings {
            owner: "octocat".to_string(),
            name: "hello".to_string(),
            first_pull_request_number: 1,
            ..SeedSettings::default()
        };
        let mut state = GitHubState::new(&seed);
        assert_eq!(state.allocate_number("1000").unwrap(), 1);
        assert!(state.repository_by_owner_and_name("octocat", "hello").is_ok());
    }
}
