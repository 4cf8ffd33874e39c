use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::{ChannelKind, ChannelSpec, Embed, PermissionOverwrite, RoleSpec};

/// Chat platform errors, classified by what the caller can do about them.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing permissions: {0}")]
    Forbidden(String),

    #[error("Invalid or missing credentials")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Server error ({0}): {1}")]
    Server(u16, String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unexpected status {0}: {1}")]
    Unexpected(u16, String),
}

/// A role as known to the platform.
#[derive(Debug, Clone)]
pub struct CreatedRole {
    pub id: String,
    pub name: String,
}

/// A channel as known to the platform.
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    pub id: String,
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: Option<String>,
    /// Number of permission overwrites currently on the channel. The
    /// provisioner compares this against the expected count to decide
    /// whether to refresh overwrites.
    pub overwrite_count: usize,
}

/// A guild member as known to the platform.
#[derive(Debug, Clone)]
pub struct GuildMember {
    pub id: String,
    pub username: String,
    /// Ids of roles the member holds.
    pub role_ids: Vec<String>,
}

/// Port for the chat platform's object model: roles, channels, messages.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Find a role by name.
    async fn find_role(&self, name: &str) -> Result<Option<CreatedRole>, GatewayError>;

    /// Create a role.
    async fn create_role(&self, spec: &RoleSpec) -> Result<CreatedRole, GatewayError>;

    /// Delete a role.
    async fn delete_role(&self, role_id: &str, reason: &str) -> Result<(), GatewayError>;

    /// Add a role to a guild member.
    async fn assign_role(&self, user_id: &str, role_id: &str) -> Result<(), GatewayError>;

    /// Look up a guild member. `Ok(None)` when not in the guild.
    async fn get_member(&self, user_id: &str) -> Result<Option<GuildMember>, GatewayError>;

    /// List the guild's channels.
    async fn list_channels(&self) -> Result<Vec<ChannelInfo>, GatewayError>;

    /// Create a channel.
    async fn create_channel(&self, spec: &ChannelSpec) -> Result<ChannelInfo, GatewayError>;

    /// Replace a channel's permission overwrites.
    async fn update_channel_overwrites(
        &self,
        channel_id: &str,
        overwrites: &[PermissionOverwrite],
    ) -> Result<(), GatewayError>;

    /// Delete a channel.
    async fn delete_channel(&self, channel_id: &str, reason: &str) -> Result<(), GatewayError>;

    /// Send an embed, optionally with plain-text content. Returns the
    /// message id.
    async fn send_embed(
        &self,
        channel_id: &str,
        content: Option<&str>,
        embed: &Embed,
    ) -> Result<String, GatewayError>;

    /// Add a reaction to a message.
    async fn add_reaction(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), GatewayError>;
}
