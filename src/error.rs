use std::path::PathBuf;

/// Errors that terminate a changelog run.
#[derive(Debug, thiserror::Error)]
pub enum ChangelogError {
    /// A required argument is missing. Raised before any network activity.
    #[error("{0}")]
    Usage(String),

    #[error(
        "The request resulted in a 404 Not Found response. Check the username, repository and possible access token."
    )]
    RepositoryNotFound,

    #[error("Could not find milestone \"{0}\"")]
    MilestoneNotFound(String),

    #[error("Could not open {} for writing", .path.display())]
    OutputTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API request error: {0}")]
    Transport(String),

    #[error("Failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ChangelogError {
    fn from(err: reqwest::Error) -> Self {
        ChangelogError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
