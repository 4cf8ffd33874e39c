//! Shared test doubles: in-memory repositories, a recording chat gateway,
//! and a canned commit client.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use jamkeeper::domain::errors::{DomainError, DomainResult};
use jamkeeper::domain::models::{
    ChannelKind, ChannelSpec, Commit, Embed, PermissionOverwrite, RepoRef, RoleSpec, Team,
    TeamMember, TeamUpdate,
};
use jamkeeper::domain::ports::{
    ChannelInfo, ChatGateway, CommitClient, CreatedRole, FetchOutcome, GatewayError, GuildMember,
    MemberRepository, TeamRepository,
};

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: Mutex<HashMap<String, Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams(teams: impl IntoIterator<Item = Team>) -> Self {
        let repo = Self::new();
        {
            let mut guard = repo.teams.lock().unwrap();
            for team in teams {
                guard.insert(team.name.clone(), team);
            }
        }
        repo
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, team: &Team) -> DomainResult<()> {
        let mut teams = self.teams.lock().unwrap();
        if teams.contains_key(&team.name) {
            return Err(DomainError::TeamExists(team.name.clone()));
        }
        teams.insert(team.name.clone(), team.clone());
        Ok(())
    }

    async fn get(&self, name: &str) -> DomainResult<Option<Team>> {
        Ok(self.teams.lock().unwrap().get(name).cloned())
    }

    async fn update(&self, name: &str, update: &TeamUpdate) -> DomainResult<()> {
        let mut teams = self.teams.lock().unwrap();
        let team = teams
            .get_mut(name)
            .ok_or_else(|| DomainError::TeamNotFound(name.to_string()))?;
        update.apply(team);
        Ok(())
    }

    async fn delete(&self, name: &str) -> DomainResult<()> {
        self.teams
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DomainError::TeamNotFound(name.to_string()))
    }

    async fn list(&self) -> DomainResult<Vec<Team>> {
        let mut teams: Vec<Team> = self.teams.lock().unwrap().values().cloned().collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }
}

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<Vec<TeamMember>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn add(&self, member: &TeamMember) -> DomainResult<()> {
        let mut members = self.members.lock().unwrap();
        if members
            .iter()
            .any(|m| m.team_name == member.team_name && m.discord_id == member.discord_id)
        {
            return Err(DomainError::MemberExists {
                team: member.team_name.clone(),
                discord_id: member.discord_id.clone(),
            });
        }
        members.push(member.clone());
        Ok(())
    }

    async fn remove(&self, team_name: &str, discord_id: &str) -> DomainResult<bool> {
        let mut members = self.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| !(m.team_name == team_name && m.discord_id == discord_id));
        Ok(members.len() < before)
    }

    async fn remove_all(&self, team_name: &str) -> DomainResult<u64> {
        let mut members = self.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| m.team_name != team_name);
        Ok((before - members.len()) as u64)
    }

    async fn list(&self, team_name: &str) -> DomainResult<Vec<TeamMember>> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.team_name == team_name)
            .cloned()
            .collect())
    }

    async fn exists(&self, team_name: &str, discord_id: &str) -> DomainResult<bool> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.team_name == team_name && m.discord_id == discord_id))
    }
}

/// Fake guild: roles, channels, members, and sent messages live in memory;
/// mutating calls are recorded so tests can assert on them.
#[derive(Default)]
pub struct FakeGateway {
    next_id: AtomicUsize,
    pub roles: Mutex<Vec<CreatedRole>>,
    pub channels: Mutex<Vec<ChannelInfo>>,
    pub guild_members: Mutex<HashMap<String, GuildMember>>,
    pub sent: Mutex<Vec<(String, Option<String>, Embed)>>,
    pub reactions: Mutex<Vec<(String, String, String)>>,
    pub assigned: Mutex<Vec<(String, String)>>,
    pub deleted_roles: Mutex<Vec<String>>,
    pub deleted_channels: Mutex<Vec<String>>,
    pub overwrite_updates: Mutex<Vec<(String, Vec<PermissionOverwrite>)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&self) -> String {
        format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn seed_role(&self, id: &str, name: &str) {
        self.roles.lock().unwrap().push(CreatedRole {
            id: id.to_string(),
            name: name.to_string(),
        });
    }

    pub fn seed_channel(
        &self,
        id: &str,
        name: &str,
        kind: ChannelKind,
        parent_id: Option<&str>,
        overwrite_count: usize,
    ) {
        self.channels.lock().unwrap().push(ChannelInfo {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            parent_id: parent_id.map(str::to_string),
            overwrite_count,
        });
    }

    pub fn seed_guild_member(&self, id: &str, username: &str, role_ids: &[&str]) {
        self.guild_members.lock().unwrap().insert(
            id.to_string(),
            GuildMember {
                id: id.to_string(),
                username: username.to_string(),
                role_ids: role_ids.iter().map(|r| r.to_string()).collect(),
            },
        );
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn find_role(&self, name: &str) -> Result<Option<CreatedRole>, GatewayError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn create_role(&self, spec: &RoleSpec) -> Result<CreatedRole, GatewayError> {
        let role = CreatedRole {
            id: self.fresh_id(),
            name: spec.name.clone(),
        };
        self.roles.lock().unwrap().push(role.clone());
        Ok(role)
    }

    async fn delete_role(&self, role_id: &str, _reason: &str) -> Result<(), GatewayError> {
        self.roles.lock().unwrap().retain(|r| r.id != role_id);
        self.deleted_roles.lock().unwrap().push(role_id.to_string());
        Ok(())
    }

    async fn assign_role(&self, user_id: &str, role_id: &str) -> Result<(), GatewayError> {
        self.assigned
            .lock()
            .unwrap()
            .push((user_id.to_string(), role_id.to_string()));
        Ok(())
    }

    async fn get_member(&self, user_id: &str) -> Result<Option<GuildMember>, GatewayError> {
        Ok(self.guild_members.lock().unwrap().get(user_id).cloned())
    }

    async fn list_channels(&self) -> Result<Vec<ChannelInfo>, GatewayError> {
        Ok(self.channels.lock().unwrap().clone())
    }

    async fn create_channel(&self, spec: &ChannelSpec) -> Result<ChannelInfo, GatewayError> {
        let info = ChannelInfo {
            id: self.fresh_id(),
            name: spec.name.clone(),
            kind: spec.kind,
            parent_id: spec.parent_id.clone(),
            overwrite_count: spec.overwrites.len(),
        };
        self.channels.lock().unwrap().push(info.clone());
        Ok(info)
    }

    async fn update_channel_overwrites(
        &self,
        channel_id: &str,
        overwrites: &[PermissionOverwrite],
    ) -> Result<(), GatewayError> {
        self.overwrite_updates
            .lock()
            .unwrap()
            .push((channel_id.to_string(), overwrites.to_vec()));
        if let Some(channel) = self
            .channels
            .lock()
            .unwrap()
            .iter_mut()
            .find(|c| c.id == channel_id)
        {
            channel.overwrite_count = overwrites.len();
        }
        Ok(())
    }

    async fn delete_channel(&self, channel_id: &str, _reason: &str) -> Result<(), GatewayError> {
        self.channels.lock().unwrap().retain(|c| c.id != channel_id);
        self.deleted_channels
            .lock()
            .unwrap()
            .push(channel_id.to_string());
        Ok(())
    }

    async fn send_embed(
        &self,
        channel_id: &str,
        content: Option<&str>,
        embed: &Embed,
    ) -> Result<String, GatewayError> {
        self.sent.lock().unwrap().push((
            channel_id.to_string(),
            content.map(str::to_string),
            embed.clone(),
        ));
        Ok(self.fresh_id())
    }

    async fn add_reaction(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), GatewayError> {
        self.reactions.lock().unwrap().push((
            channel_id.to_string(),
            message_id.to_string(),
            emoji.to_string(),
        ));
        Ok(())
    }
}

/// Commit client returning canned outcomes per repository.
#[derive(Default)]
pub struct StubCommitClient {
    outcomes: Mutex<HashMap<String, FetchOutcome>>,
}

impl StubCommitClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, repo: &str, outcome: FetchOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(repo.to_string(), outcome);
    }

    pub fn set_commits(&self, repo: &str, timestamps: &[&str]) {
        let commits = timestamps
            .iter()
            .enumerate()
            .map(|(i, ts)| Commit::new(format!("sha-{i}"), *ts))
            .collect();
        self.set(repo, FetchOutcome::Commits(commits));
    }
}

#[async_trait]
impl CommitClient for StubCommitClient {
    async fn fetch_commits(&self, repo: &RepoRef) -> FetchOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .get(&repo.to_string())
            .cloned()
            .unwrap_or(FetchOutcome::Unavailable { status: Some(404) })
    }
}
