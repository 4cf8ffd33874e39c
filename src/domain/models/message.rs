//! Platform-facing message and provisioning specs.
//!
//! These are the request shapes services hand to the chat gateway port;
//! they carry no wire-format details.

use serde::{Deserialize, Serialize};

use super::color::RoleColor;

/// A rich embed message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// 24-bit RGB color.
    pub color: u32,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: 0xff6a00,
            footer: None,
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Request to create a role.
#[derive(Debug, Clone)]
pub struct RoleSpec {
    pub name: String,
    pub color: RoleColor,
    pub mentionable: bool,
    /// Audit-log reason.
    pub reason: Option<String>,
}

impl RoleSpec {
    pub fn new(name: impl Into<String>, color: RoleColor) -> Self {
        Self {
            name: name.into(),
            color,
            mentionable: true,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Channel kinds the provisioner cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Text,
    Voice,
    Category,
}

/// A single role's access to a channel: either full member access or an
/// explicit view denial (used for the everyone role on private channels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionOverwrite {
    pub role_id: String,
    pub grant: bool,
}

impl PermissionOverwrite {
    pub fn allow(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            grant: true,
        }
    }

    pub fn deny(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            grant: false,
        }
    }
}

/// Request to create a channel.
#[derive(Debug, Clone)]
pub struct ChannelSpec {
    pub name: String,
    pub kind: ChannelKind,
    /// Parent category id, if any.
    pub parent_id: Option<String>,
    pub overwrites: Vec<PermissionOverwrite>,
    pub reason: Option<String>,
}

impl ChannelSpec {
    pub fn new(name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent_id: None,
            overwrites: Vec::new(),
            reason: None,
        }
    }

    pub fn under(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_overwrites(mut self, overwrites: Vec<PermissionOverwrite>) -> Self {
        self.overwrites = overwrites;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
