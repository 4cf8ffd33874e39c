//! Team and membership documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team record: the document the directory stores per team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team name; also the name of the platform role.
    pub name: String,

    /// Repository reference string (owner/name or full URL). Empty or
    /// missing means the team is excluded from deadline reports.
    pub github_repo: Option<String>,

    /// GitHub usernames of the team's members.
    pub github_usernames: Vec<String>,

    /// Free-form status text.
    pub status: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            github_repo: None,
            github_usernames: Vec::new(),
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The repository reference, if set to a non-empty string.
    ///
    /// An absent or empty reference yields `None`: the team is simply not
    /// evaluated, it never produces a zero-count report entry.
    pub fn repo_ref(&self) -> Option<&str> {
        self.github_repo.as_deref().filter(|r| !r.is_empty())
    }

    /// Text channel name derived from the team name.
    pub fn text_channel_name(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Voice channel name derived from the team name.
    pub fn voice_channel_name(&self) -> String {
        format!("{} Voice", self.name)
    }
}

/// A member row in the team directory, keyed by platform user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_name: String,
    pub discord_id: String,
    pub discord_username: String,
    pub display_name: String,
    pub added_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(
        team_name: impl Into<String>,
        discord_id: impl Into<String>,
        discord_username: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            discord_id: discord_id.into(),
            discord_username: discord_username.into(),
            display_name: display_name.into(),
            added_at: Utc::now(),
        }
    }
}

/// Partial update of a team document. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamUpdate {
    pub github_repo: Option<String>,
    pub github_usernames: Option<Vec<String>>,
    pub status: Option<String>,
}

impl TeamUpdate {
    pub fn is_empty(&self) -> bool {
        self.github_repo.is_none() && self.github_usernames.is_none() && self.status.is_none()
    }

    /// Apply this update to a team, bumping `updated_at`.
    pub fn apply(&self, team: &mut Team) {
        if let Some(repo) = &self.github_repo {
            team.github_repo = Some(repo.clone());
        }
        if let Some(usernames) = &self.github_usernames {
            team.github_usernames = usernames.clone();
        }
        if let Some(status) = &self.status {
            team.status = Some(status.clone());
        }
        team.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_ref_empty_is_none() {
        let mut team = Team::new("Rustaceans");
        assert!(team.repo_ref().is_none());

        team.github_repo = Some(String::new());
        assert!(team.repo_ref().is_none());

        team.github_repo = Some("acme/widget".to_string());
        assert_eq!(team.repo_ref(), Some("acme/widget"));
    }

    #[test]
    fn test_channel_names() {
        let team = Team::new("Rust Raiders");
        assert_eq!(team.text_channel_name(), "rust-raiders");
        assert_eq!(team.voice_channel_name(), "Rust Raiders Voice");
    }

    #[test]
    fn test_update_apply_partial() {
        let mut team = Team::new("Rustaceans");
        let before = team.updated_at;

        let update = TeamUpdate {
            status: Some("submitted".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply(&mut team);

        assert_eq!(team.status.as_deref(), Some("submitted"));
        assert!(team.github_repo.is_none());
        assert!(team.updated_at >= before);
    }

    #[test]
    fn test_update_empty() {
        assert!(TeamUpdate::default().is_empty());
    }
}
