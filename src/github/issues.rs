use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::Repository;
use super::client::Transport;
use super::pagination;
use crate::changelog::Changelog;
use crate::error::{ChangelogError, Result};

/// An issue of the milestone, reduced to what classification needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// Label names in the order the API returned them.
    pub labels: Vec<String>,
    pub is_pull_request: bool,
}

#[derive(Deserialize, Debug)]
struct IssueResponse {
    number: u64,
    title: String,
    #[serde(default)]
    labels: Vec<LabelResponse>,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
struct LabelResponse {
    name: String,
}

impl From<IssueResponse> for Issue {
    fn from(issue: IssueResponse) -> Self {
        Issue {
            number: issue.number,
            title: issue.title,
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}

/// Parses one page of `GET /repos/{owner}/{repo}/issues`.
pub fn parse_issues(body: &str) -> Result<Vec<Issue>> {
    let issues: Vec<IssueResponse> = serde_json::from_str(body)?;
    Ok(issues.into_iter().map(Issue::from).collect())
}

/// Collects and classifies every issue of `milestone`.
///
/// Follows `rel="next"` links until a page has none, so N linked pages cost
/// exactly N requests. Any failure aborts the whole aggregation; nothing
/// collected before it is returned.
pub async fn aggregate<T: Transport>(
    transport: &T,
    api: &str,
    repository: &Repository,
    milestone: u64,
) -> Result<Changelog> {
    let mut changelog = Changelog::default();
    let mut url = repository.endpoint(api, &format!("issues?milestone={milestone}&state=all"));
    let mut page_number = 1;

    loop {
        let page = transport.get(&url).await?;

        match page.status {
            StatusCode::NOT_FOUND if page_number == 1 => {
                return Err(ChangelogError::RepositoryNotFound);
            }
            status if !status.is_success() => {
                return Err(ChangelogError::Transport(format!("{status} from {url}")));
            }
            _ => {}
        }

        let issues = parse_issues(&page.body)?;
        changelog.classify_page(&issues);
        debug!(
            "page {page_number}: {} issue(s) found, {} classified so far",
            issues.len(),
            changelog.total_count()
        );

        match pagination::next_url(page.link.as_deref()) {
            Some(next) => {
                url = next;
                page_number += 1;
            }
            None => break,
        }
    }

    Ok(changelog)
}
