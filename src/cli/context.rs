//! Shared wiring for CLI commands: config, database, repositories, and the
//! outbound clients. Built once per invocation.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::adapters::discord::{DiscordGatewayConfig, DiscordRestGateway};
use crate::adapters::github::{GithubClientConfig, GithubCommitClient};
use crate::adapters::sqlite::{Database, SqliteMemberRepository, SqliteTeamRepository};
use crate::domain::authz::{AuthzPolicy, Capabilities};
use crate::domain::models::Config;
use crate::domain::ports::{ChatGateway, CommitClient, MemberRepository, TeamRepository};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{Announcer, DeadlineService, PollService, Provisioner, TeamService};

pub struct AppContext {
    pub config: Config,
    pub database: Database,
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MemberRepository>,
}

impl AppContext {
    /// Load config, open the database, and run migrations.
    pub async fn init() -> Result<Self> {
        let config = ConfigLoader::load()?;
        Self::with_config(config).await
    }

    pub async fn with_config(config: Config) -> Result<Self> {
        if let Some(parent) = Path::new(&config.database.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let database = Database::connect(
            &format!("sqlite:{}", config.database.path),
            config.database.max_connections,
        )
        .await?;
        database.migrate().await?;

        let teams: Arc<dyn TeamRepository> =
            Arc::new(SqliteTeamRepository::new(database.pool().clone()));
        let members: Arc<dyn MemberRepository> =
            Arc::new(SqliteMemberRepository::new(database.pool().clone()));

        Ok(Self { config, database, teams, members })
    }

    /// The CLI operator acts with administrator capabilities; role-based
    /// authorization applies to chat-side callers, not the local console.
    pub fn operator(&self) -> Capabilities {
        Capabilities::administrator()
    }

    pub fn policy(&self) -> AuthzPolicy {
        AuthzPolicy::new(self.config.authz.allowed_roles.clone())
    }

    /// Build the chat gateway. Requires a bot token and guild id.
    pub fn gateway(&self) -> Result<Arc<dyn ChatGateway>> {
        if self.config.discord.token.is_empty() {
            bail!("No Discord bot token configured (set JAMKEEPER_DISCORD__TOKEN)");
        }
        if self.config.guild_id.is_empty() {
            bail!("No guild id configured (set guild_id in .jamkeeper/config.yaml)");
        }

        let gateway = DiscordRestGateway::new(DiscordGatewayConfig {
            token: self.config.discord.token.clone(),
            guild_id: self.config.guild_id.clone(),
            base_url: self.config.discord.api_url.clone(),
            timeout_secs: 30,
        })
        .context("Failed to build Discord client")?;
        Ok(Arc::new(gateway))
    }

    pub fn commit_client(&self) -> Result<Arc<dyn CommitClient>> {
        let client = GithubCommitClient::new(GithubClientConfig {
            token: self.config.github.token.clone(),
            base_url: self.config.github.api_url.clone(),
            timeout_secs: 30,
        })
        .context("Failed to build GitHub client")?;
        Ok(Arc::new(client))
    }

    pub fn team_service(&self) -> Result<TeamService> {
        Ok(TeamService::new(
            Arc::clone(&self.teams),
            Arc::clone(&self.members),
            self.gateway()?,
            self.policy(),
        ))
    }

    pub fn provisioner(&self) -> Result<Provisioner> {
        Ok(Provisioner::new(
            Arc::clone(&self.teams),
            Arc::clone(&self.members),
            self.gateway()?,
            self.policy(),
            self.config.category_name.clone(),
            self.config.authz.allowed_roles.clone(),
            // The everyone role id equals the guild id on Discord.
            self.config.guild_id.clone(),
        ))
    }

    pub fn announcer(&self) -> Result<Announcer> {
        Ok(Announcer::new(self.gateway()?, self.policy()))
    }

    pub fn poll_service(&self) -> Result<PollService> {
        Ok(PollService::new(self.gateway()?))
    }

    pub fn deadline_service(&self) -> Result<DeadlineService> {
        Ok(DeadlineService::new(
            Arc::clone(&self.teams),
            self.commit_client()?,
            self.config.deadline.cutoff,
        ))
    }
}
