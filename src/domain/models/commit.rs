//! Commit and repository reference models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// A single commit as returned by the commit-listing API, newest first.
///
/// The committer timestamp is kept as the raw RFC 3339 string from the wire.
/// Parsing happens at evaluation time so that a malformed timestamp surfaces
/// to the caller instead of being swallowed alongside transport failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash.
    pub sha: String,

    /// Committer name, when the API provides one.
    pub committer: Option<String>,

    /// Committer timestamp, RFC 3339 with an explicit offset ("Z" accepted).
    pub committed_at: String,
}

impl Commit {
    pub fn new(sha: impl Into<String>, committed_at: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            committer: None,
            committed_at: committed_at.into(),
        }
    }

    /// Parse the committer timestamp.
    ///
    /// Naive timestamps (no offset) are rejected; RFC 3339 requires an
    /// explicit offset and that is what the commit-listing API emits.
    pub fn timestamp(&self) -> DomainResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.committed_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DomainError::InvalidTimestamp(format!("{}: {e}", self.committed_at)))
    }
}

/// An owner/name pair identifying where a team's code is hosted.
///
/// Parsed from a free-form string (commonly a full repository URL) by taking
/// the last two path segments. No further validation; a malformed reference
/// produces a request that fails upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let mut segments = raw.rsplit('/');
        let name = segments.next();
        let owner = segments.next();
        match (owner, name) {
            (Some(owner), Some(name)) if !owner.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(DomainError::InvalidRepoRef(raw.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
