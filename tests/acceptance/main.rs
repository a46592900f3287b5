use cucumber::World;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Canned response for one page of the issues listing.
#[derive(Debug, Clone)]
pub enum IssuePage {
    Issues(Vec<serde_json::Value>),
    Status(u16),
}

#[derive(Default, World)]
pub struct GhclWorld {
    pub server: Option<wiremock::MockServer>,
    pub milestones: Vec<serde_json::Value>,
    pub repository_missing: bool,
    pub issue_pages: BTreeMap<u32, IssuePage>,
    pub output_file: Option<PathBuf>,
    pub captured_output: Vec<u8>,
    pub run_error: Option<String>,
}

impl std::fmt::Debug for GhclWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhclWorld")
            .field("server", &self.server.as_ref().map(|s| s.uri()))
            .field("milestones", &self.milestones)
            .field("repository_missing", &self.repository_missing)
            .field("issue_pages", &self.issue_pages)
            .field("output_file", &self.output_file)
            .field("run_error", &self.run_error)
            .finish()
    }
}

#[tokio::main]
async fn main() {
    GhclWorld::run("features").await;
}
