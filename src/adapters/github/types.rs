//! Wire types for the commit-listing endpoint.
//!
//! The committer date is deserialized as a string, not a timestamp: parse
//! failures belong to the deadline evaluator, not the fetch path.

use serde::Deserialize;

use crate::domain::models::Commit;

#[derive(Debug, Deserialize)]
pub struct CommitEnvelope {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    pub committer: CommitSignature,
}

#[derive(Debug, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub name: Option<String>,
    pub date: String,
}

impl From<CommitEnvelope> for Commit {
    fn from(envelope: CommitEnvelope) -> Self {
        Commit {
            sha: envelope.sha,
            committer: envelope.commit.committer.name,
            committed_at: envelope.commit.committer.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_commit_envelope() {
        let body = serde_json::json!([{
            "sha": "abc123",
            "commit": {
                "committer": {
                    "name": "Ada",
                    "date": "2025-12-24T00:00:00Z"
                }
            }
        }])
        .to_string();

        let envelopes: Vec<CommitEnvelope> = serde_json::from_str(&body).unwrap();
        let commit = Commit::from(envelopes.into_iter().next().unwrap());
        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.committer.as_deref(), Some("Ada"));
        assert_eq!(commit.committed_at, "2025-12-24T00:00:00Z");
    }

    #[test]
    fn test_malformed_date_survives_deserialization() {
        // Dates stay strings on the wire type; a bad one is the evaluator's
        // problem, not a fetch failure.
        let body = serde_json::json!([{
            "sha": "abc123",
            "commit": { "committer": { "date": "not-a-date" } }
        }])
        .to_string();

        let envelopes: Vec<CommitEnvelope> = serde_json::from_str(&body).unwrap();
        assert_eq!(envelopes[0].commit.committer.date, "not-a-date");
    }
}
