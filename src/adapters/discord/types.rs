//! Wire types for the Discord REST API, v10.

use serde::{Deserialize, Serialize};

use crate::domain::models::{ChannelKind, Embed, PermissionOverwrite};
use crate::domain::ports::{ChannelInfo, CreatedRole, GuildMember};

/// View Channel | Send Messages | Read Message History | Connect | Speak.
pub const MEMBER_ACCESS: u64 = (1 << 10) | (1 << 11) | (1 << 16) | (1 << 20) | (1 << 21);
/// View Channel.
pub const VIEW_CHANNEL: u64 = 1 << 10;

/// Discord channel type codes.
const CHANNEL_TEXT: u8 = 0;
const CHANNEL_VOICE: u8 = 2;
const CHANNEL_CATEGORY: u8 = 4;

#[derive(Debug, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub color: u32,
    pub mentionable: bool,
}

#[derive(Debug, Deserialize)]
pub struct RolePayload {
    pub id: String,
    pub name: String,
}

impl From<RolePayload> for CreatedRole {
    fn from(payload: RolePayload) -> Self {
        CreatedRole {
            id: payload.id,
            name: payload.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OverwritePayload {
    pub id: String,
    /// 0 = role overwrite.
    #[serde(rename = "type")]
    pub kind: u8,
    pub allow: String,
    pub deny: String,
}

impl From<&PermissionOverwrite> for OverwritePayload {
    fn from(ow: &PermissionOverwrite) -> Self {
        let (allow, deny) = if ow.grant {
            (MEMBER_ACCESS, 0)
        } else {
            (0, VIEW_CHANNEL)
        };
        Self {
            id: ow.role_id.clone(),
            kind: 0,
            allow: allow.to_string(),
            deny: deny.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateChannelRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub permission_overwrites: Vec<OverwritePayload>,
}

pub fn channel_type_code(kind: ChannelKind) -> u8 {
    match kind {
        ChannelKind::Text => CHANNEL_TEXT,
        ChannelKind::Voice => CHANNEL_VOICE,
        ChannelKind::Category => CHANNEL_CATEGORY,
    }
}

#[derive(Debug, Deserialize)]
pub struct ChannelPayload {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub permission_overwrites: Vec<serde_json::Value>,
}

impl ChannelPayload {
    /// Channels with types the bot does not manage map to `None`.
    pub fn into_channel_info(self) -> Option<ChannelInfo> {
        let kind = match self.kind {
            CHANNEL_TEXT => ChannelKind::Text,
            CHANNEL_VOICE => ChannelKind::Voice,
            CHANNEL_CATEGORY => ChannelKind::Category,
            _ => return None,
        };
        Some(ChannelInfo {
            id: self.id,
            name: self.name,
            kind,
            parent_id: self.parent_id,
            overwrite_count: self.permission_overwrites.len(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct MemberPayload {
    pub user: UserPayload,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub username: String,
}

impl From<MemberPayload> for GuildMember {
    fn from(payload: MemberPayload) -> Self {
        GuildMember {
            id: payload.user.id,
            username: payload.user.username,
            role_ids: payload.roles,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<EmbedPayload>,
}

#[derive(Debug, Serialize)]
pub struct EmbedPayload {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl From<&Embed> for EmbedPayload {
    fn from(embed: &Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            color: embed.color,
            footer: embed.footer.clone().map(|text| EmbedFooter { text }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    pub id: String,
}
