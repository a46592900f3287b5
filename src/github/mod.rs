pub mod client;
pub mod issues;
pub mod milestones;
pub mod pagination;

/// Coordinates of a repository on the upstream tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub user: String,
    pub name: String,
}

impl Repository {
    pub fn new(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            name: name.into(),
        }
    }

    /// Builds `{api}/repos/{user}/{name}/{path}`.
    pub fn endpoint(&self, api: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            api.trim_end_matches('/'),
            self.user,
            self.name,
            path
        )
    }
}
