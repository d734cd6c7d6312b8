use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("unknown repository {0}")]
    UnknownRepository(String),

    #[error("unknown id {0}")]
    UnknownId(String),

    #[error("unrecognized pull request #{number} in repository {repository}")]
    UnknownPullRequest { number: i32, repository: String },

    #[error("pull request {pull_request} refers to missing repository {repository}")]
    DanglingRepository {
        pull_request: String,
        repository: String,
    },

    #[error("id {0} is already in use")]
    DuplicateId(String),

    #[error("repository {0} has run out of pull request numbers")]
    NumbersExhausted(String),

    #[error("GraphQL query failed with errors:\n\n{0}")]
    Query(String),

    #[error("Schema binding error: {0}")]
    SchemaBinding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;
