use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::Repository;
use super::client::Transport;
use crate::error::{ChangelogError, Result};

/// A milestone as listed by `GET /repos/{owner}/{repo}/milestones`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Milestone {
    pub title: String,
    pub number: u64,
}

/// Milestones in every state, most recently created first.
const MILESTONES_QUERY: &str = "milestones?state=all&direction=desc";

/// Returns the number of the first milestone whose title equals `title`.
///
/// The comparison is exact and case-sensitive.
pub fn find_milestone(milestones: &[Milestone], title: &str) -> Option<u64> {
    milestones
        .iter()
        .find(|milestone| milestone.title == title)
        .map(|milestone| milestone.number)
}

/// Resolves a milestone title to its number with a single listing request.
///
/// # Errors
///
/// * `RepositoryNotFound` when the listing answers 404.
/// * `MilestoneNotFound` when no title matches.
/// * `Transport` for any other unsuccessful status, `Decode` for an unreadable body.
pub async fn resolve_milestone<T: Transport>(
    transport: &T,
    api: &str,
    repository: &Repository,
    title: &str,
) -> Result<u64> {
    let page = transport
        .get(&repository.endpoint(api, MILESTONES_QUERY))
        .await?;

    match page.status {
        StatusCode::NOT_FOUND => return Err(ChangelogError::RepositoryNotFound),
        status if !status.is_success() => {
            return Err(ChangelogError::Transport(status.to_string()));
        }
        _ => {}
    }

    let milestones: Vec<Milestone> = serde_json::from_str(&page.body)?;
    debug!("{} milestone(s) listed", milestones.len());

    let number = find_milestone(&milestones, title)
        .ok_or_else(|| ChangelogError::MilestoneNotFound(title.to_string()))?;
    debug!("milestone \"{title}\" resolved to #{number}");
    Ok(number)
}
