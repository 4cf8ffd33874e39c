//! Bulk provisioning of team roles and channels.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::authz::{AuthzPolicy, Capabilities};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    ChannelKind, ChannelSpec, PermissionOverwrite, RoleColor, RoleSpec, Team,
};
use crate::domain::ports::{ChannelInfo, ChatGateway, MemberRepository, TeamRepository};

/// Counts from a channel setup run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSetupSummary {
    pub text_created: usize,
    pub text_updated: usize,
    pub text_skipped: usize,
    pub voice_created: usize,
    pub voice_updated: usize,
    pub voice_skipped: usize,
}

impl ChannelSetupSummary {
    pub fn format(&self) -> String {
        format!(
            "Channel setup complete!\n\n\
             Text channels: created {}, updated {}, skipped {}\n\
             Voice channels: created {}, updated {}, skipped {}",
            self.text_created,
            self.text_updated,
            self.text_skipped,
            self.voice_created,
            self.voice_updated,
            self.voice_skipped,
        )
    }
}

/// Counts from a role setup run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoleSetupSummary {
    pub roles_created: usize,
    pub roles_existing: usize,
    pub members_assigned: usize,
    pub errors: usize,
}

impl RoleSetupSummary {
    pub fn format(&self) -> String {
        let mut out = format!(
            "Role assignment complete!\n\n\
             Roles created: {}\nRoles already existed: {}\nMembers assigned: {}",
            self.roles_created, self.roles_existing, self.members_assigned,
        );
        if self.errors > 0 {
            out.push_str(&format!("\nErrors: {}", self.errors));
        }
        out
    }
}

/// Provisions roles and private channels for every stored team.
pub struct Provisioner {
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn MemberRepository>,
    gateway: Arc<dyn ChatGateway>,
    policy: AuthzPolicy,
    /// Category the team channels live under.
    category_name: String,
    /// Organizer roles granted access to every team channel.
    organizer_roles: Vec<String>,
    /// The everyone role (denied view on team channels); on Discord its id
    /// equals the guild id.
    everyone_role_id: String,
}

impl Provisioner {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        members: Arc<dyn MemberRepository>,
        gateway: Arc<dyn ChatGateway>,
        policy: AuthzPolicy,
        category_name: String,
        organizer_roles: Vec<String>,
        everyone_role_id: String,
    ) -> Self {
        Self {
            teams,
            members,
            gateway,
            policy,
            category_name,
            organizer_roles,
            everyone_role_id,
        }
    }

    fn authorize(&self, caps: &Capabilities) -> DomainResult<()> {
        if self.policy.authorize(caps) {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    /// Create or refresh the text and voice channels for every team.
    ///
    /// Teams whose role is missing are skipped with a warning; run role
    /// setup first. Existing channels get their overwrites refreshed when
    /// the overwrite count drifts from the expected set.
    pub async fn setup_channels(&self, caps: &Capabilities) -> DomainResult<ChannelSetupSummary> {
        self.authorize(caps)?;

        let teams = self.teams.list().await?;
        if teams.is_empty() {
            return Err(DomainError::ValidationFailed(
                "No teams found in database".to_string(),
            ));
        }

        let channels = self.gateway.list_channels().await?;
        let category_id = match channels
            .iter()
            .find(|c| c.kind == ChannelKind::Category && c.name == self.category_name)
        {
            Some(category) => category.id.clone(),
            None => {
                let spec = ChannelSpec::new(&self.category_name, ChannelKind::Category)
                    .with_reason("Team category created");
                let created = self.gateway.create_channel(&spec).await?;
                info!(category = %self.category_name, "created team category");
                created.id
            }
        };

        // Organizer roles that do not exist are simply left out.
        let mut organizer_ids = Vec::new();
        for role_name in &self.organizer_roles {
            if let Some(role) = self.gateway.find_role(role_name).await? {
                organizer_ids.push(role.id);
            }
        }

        let mut summary = ChannelSetupSummary::default();
        for team in &teams {
            let Some(team_role) = self.gateway.find_role(&team.name).await? else {
                warn!(team = %team.name, "role not found, skipping channel creation");
                continue;
            };

            let mut overwrites = vec![
                PermissionOverwrite::deny(&self.everyone_role_id),
                PermissionOverwrite::allow(&team_role.id),
            ];
            for id in &organizer_ids {
                overwrites.push(PermissionOverwrite::allow(id));
            }

            let (text_outcome, voice_outcome) = self
                .ensure_team_channels(team, &category_id, &overwrites)
                .await?;
            text_outcome.tally(
                &mut summary.text_created,
                &mut summary.text_updated,
                &mut summary.text_skipped,
            );
            voice_outcome.tally(
                &mut summary.voice_created,
                &mut summary.voice_updated,
                &mut summary.voice_skipped,
            );
        }

        Ok(summary)
    }

    async fn ensure_team_channels(
        &self,
        team: &Team,
        category_id: &str,
        overwrites: &[PermissionOverwrite],
    ) -> DomainResult<(ChannelOutcome, ChannelOutcome)> {
        // Re-list so channels created earlier in this run are visible.
        let channels = self.gateway.list_channels().await?;

        let text = self
            .ensure_channel(
                &channels,
                &team.text_channel_name(),
                ChannelKind::Text,
                category_id,
                overwrites,
            )
            .await?;
        let voice = self
            .ensure_channel(
                &channels,
                &team.voice_channel_name(),
                ChannelKind::Voice,
                category_id,
                overwrites,
            )
            .await?;
        Ok((text, voice))
    }

    async fn ensure_channel(
        &self,
        channels: &[ChannelInfo],
        name: &str,
        kind: ChannelKind,
        category_id: &str,
        overwrites: &[PermissionOverwrite],
    ) -> DomainResult<ChannelOutcome> {
        let existing = channels
            .iter()
            .find(|c| c.kind == kind && c.name == name && c.parent_id.as_deref() == Some(category_id));

        match existing {
            Some(channel) if channel.overwrite_count != overwrites.len() => {
                self.gateway
                    .update_channel_overwrites(&channel.id, overwrites)
                    .await?;
                Ok(ChannelOutcome::Updated)
            }
            Some(_) => Ok(ChannelOutcome::Skipped),
            None => {
                let spec = ChannelSpec::new(name, kind)
                    .under(category_id)
                    .with_overwrites(overwrites.to_vec())
                    .with_reason("Team channel created");
                self.gateway.create_channel(&spec).await?;
                info!(channel = %name, ?kind, "created team channel");
                Ok(ChannelOutcome::Created)
            }
        }
    }

    /// Create missing team roles and assign them to stored members present
    /// in the guild. Per-team and per-member failures are counted, not
    /// fatal.
    pub async fn setup_roles(&self, caps: &Capabilities) -> DomainResult<RoleSetupSummary> {
        self.authorize(caps)?;

        let teams = self.teams.list().await?;
        if teams.is_empty() {
            return Err(DomainError::ValidationFailed(
                "No teams found in database".to_string(),
            ));
        }

        let mut summary = RoleSetupSummary::default();
        for team in &teams {
            let role = match self.gateway.find_role(&team.name).await? {
                Some(role) => {
                    summary.roles_existing += 1;
                    role
                }
                None => {
                    let spec = RoleSpec::new(&team.name, RoleColor::ORANGE)
                        .with_reason("Auto-created by setup");
                    match self.gateway.create_role(&spec).await {
                        Ok(role) => {
                            summary.roles_created += 1;
                            info!(team = %team.name, "created role");
                            role
                        }
                        Err(e) => {
                            error!(team = %team.name, "error creating role: {e}");
                            summary.errors += 1;
                            continue;
                        }
                    }
                }
            };

            for member in self.members.list(&team.name).await? {
                match self.gateway.get_member(&member.discord_id).await? {
                    Some(guild_member) => {
                        if guild_member.role_ids.contains(&role.id) {
                            continue;
                        }
                        match self.gateway.assign_role(&member.discord_id, &role.id).await {
                            Ok(()) => summary.members_assigned += 1,
                            Err(e) => {
                                error!(
                                    team = %team.name,
                                    discord_id = %member.discord_id,
                                    "error assigning role: {e}"
                                );
                                summary.errors += 1;
                            }
                        }
                    }
                    None => {
                        warn!(discord_id = %member.discord_id, "member not found in guild");
                    }
                }
            }
        }

        Ok(summary)
    }
}

#[derive(Debug, Clone, Copy)]
enum ChannelOutcome {
    Created,
    Updated,
    Skipped,
}

impl ChannelOutcome {
    fn tally(self, created: &mut usize, updated: &mut usize, skipped: &mut usize) {
        match self {
            Self::Created => *created += 1,
            Self::Updated => *updated += 1,
            Self::Skipped => *skipped += 1,
        }
    }
}
