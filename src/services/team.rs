//! Team lifecycle service: create, update, delete, and membership.

use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::authz::{AuthzPolicy, Capabilities};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{RoleColor, RoleSpec, Team, TeamMember, TeamUpdate};
use crate::domain::ports::{ChatGateway, MemberRepository, TeamRepository};

/// Request to create a team.
#[derive(Debug, Clone, Default)]
pub struct CreateTeam {
    pub name: String,
    /// Color name or hex code; platform default when absent.
    pub color: Option<String>,
    pub github_repo: Option<String>,
    pub github_usernames: Vec<String>,
    pub status: Option<String>,
}

/// Outcome of a team update, distinguishing a no-op request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NothingToUpdate,
}

pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn MemberRepository>,
    gateway: Arc<dyn ChatGateway>,
    policy: AuthzPolicy,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        members: Arc<dyn MemberRepository>,
        gateway: Arc<dyn ChatGateway>,
        policy: AuthzPolicy,
    ) -> Self {
        Self { teams, members, gateway, policy }
    }

    fn authorize(&self, caps: &Capabilities) -> DomainResult<()> {
        if self.policy.authorize(caps) {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    /// Create a team: platform role plus directory document.
    ///
    /// Rejects the request when a role with the same name already exists,
    /// before touching anything.
    pub async fn create_team(&self, caps: &Capabilities, req: CreateTeam) -> DomainResult<Team> {
        self.authorize(caps)?;

        let color = match &req.color {
            Some(raw) => RoleColor::from_str(raw)?,
            None => RoleColor::DEFAULT,
        };

        if self.gateway.find_role(&req.name).await?.is_some() {
            return Err(DomainError::TeamExists(req.name));
        }

        let spec = RoleSpec::new(&req.name, color).with_reason("Team role created");
        let role = self.gateway.create_role(&spec).await?;
        info!(team = %req.name, role_id = %role.id, "created team role");

        let mut team = Team::new(req.name);
        team.github_repo = req.github_repo;
        team.github_usernames = req.github_usernames;
        team.status = req.status;
        self.teams.insert(&team).await?;

        Ok(team)
    }

    /// Apply a partial update to a team document.
    pub async fn update_team(
        &self,
        caps: &Capabilities,
        name: &str,
        update: TeamUpdate,
    ) -> DomainResult<UpdateOutcome> {
        self.authorize(caps)?;

        if self.teams.get(name).await?.is_none() {
            return Err(DomainError::TeamNotFound(name.to_string()));
        }
        if update.is_empty() {
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        self.teams.update(name, &update).await?;
        Ok(UpdateOutcome::Updated)
    }

    /// Delete a team and everything attached to it: document, membership
    /// rows, the platform role, and the team channel when one exists.
    pub async fn delete_team(&self, caps: &Capabilities, name: &str) -> DomainResult<()> {
        self.authorize(caps)?;

        let Some(team) = self.teams.get(name).await? else {
            return Err(DomainError::TeamNotFound(name.to_string()));
        };

        self.teams.delete(name).await?;
        let removed = self.members.remove_all(name).await?;
        info!(team = %name, members_removed = removed, "deleted team document");

        if let Some(role) = self.gateway.find_role(name).await? {
            self.gateway.delete_role(&role.id, "Team deleted").await?;
        }

        let channels = self.gateway.list_channels().await?;
        if let Some(channel) = channels
            .iter()
            .find(|c| c.name == team.text_channel_name())
        {
            self.gateway.delete_channel(&channel.id, "Team deleted").await?;
        }

        Ok(())
    }

    /// Add a member row for a team. The platform role is assigned later by
    /// the provisioner, not here.
    pub async fn add_member(&self, caps: &Capabilities, member: TeamMember) -> DomainResult<()> {
        self.authorize(caps)?;

        if self.teams.get(&member.team_name).await?.is_none() {
            return Err(DomainError::TeamNotFound(member.team_name));
        }
        if self.members.exists(&member.team_name, &member.discord_id).await? {
            return Err(DomainError::MemberExists {
                team: member.team_name,
                discord_id: member.discord_id,
            });
        }

        self.members.add(&member).await
    }

    /// Remove a member row from a team.
    pub async fn remove_member(
        &self,
        caps: &Capabilities,
        team_name: &str,
        discord_id: &str,
    ) -> DomainResult<()> {
        self.authorize(caps)?;

        if self.teams.get(team_name).await?.is_none() {
            return Err(DomainError::TeamNotFound(team_name.to_string()));
        }
        if !self.members.remove(team_name, discord_id).await? {
            warn!(team = %team_name, discord_id, "remove requested for absent member");
            return Err(DomainError::MemberNotFound {
                team: team_name.to_string(),
                discord_id: discord_id.to_string(),
            });
        }
        Ok(())
    }

    /// Fetch one team.
    pub async fn get_team(&self, name: &str) -> DomainResult<Team> {
        self.teams
            .get(name)
            .await?
            .ok_or_else(|| DomainError::TeamNotFound(name.to_string()))
    }

    /// Fetch all teams.
    pub async fn list_teams(&self) -> DomainResult<Vec<Team>> {
        self.teams.list().await
    }

    /// Fetch a team's members.
    pub async fn list_members(&self, team_name: &str) -> DomainResult<Vec<TeamMember>> {
        self.members.list(team_name).await
    }
}
