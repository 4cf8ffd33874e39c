use async_trait::async_trait;

use crate::domain::models::{Commit, RepoRef};

/// Result of a commit fetch.
///
/// Transport and authorization failures degrade to an empty commit list,
/// but the variant keeps "no data" distinguishable from "call failed" for
/// callers that want the distinction. `into_commits` collapses both, which
/// is the documented reference behavior.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Up to the page cap of most recent commits, newest first.
    Commits(Vec<Commit>),
    /// The fetch failed; treated as zero commits downstream.
    Unavailable { status: Option<u16> },
}

impl FetchOutcome {
    pub fn into_commits(self) -> Vec<Commit> {
        match self {
            Self::Commits(commits) => commits,
            Self::Unavailable { .. } => Vec::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Port for the remote commit-listing API.
#[async_trait]
pub trait CommitClient: Send + Sync {
    /// Fetch the most recent commits for a repository, newest first.
    ///
    /// Never errors: failures are folded into [`FetchOutcome::Unavailable`].
    async fn fetch_commits(&self, repo: &RepoRef) -> FetchOutcome;
}
