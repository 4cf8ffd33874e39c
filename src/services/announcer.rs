//! Announcement broadcast to text channels.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::authz::{AuthzPolicy, Capabilities};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ChannelKind, Embed};
use crate::domain::ports::ChatGateway;

/// Result of a broadcast: how many sends succeeded out of how many targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementSummary {
    pub sent: usize,
    pub total: usize,
}

pub struct Announcer {
    gateway: Arc<dyn ChatGateway>,
    policy: AuthzPolicy,
}

impl Announcer {
    pub fn new(gateway: Arc<dyn ChatGateway>, policy: AuthzPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Send an announcement embed to all text channels, or to the named
    /// subset. An unknown channel name fails the whole request before
    /// anything is sent; per-channel send failures afterwards are logged
    /// and counted.
    pub async fn announce(
        &self,
        caps: &Capabilities,
        message: &str,
        channel_names: Option<&[String]>,
        announced_by: &str,
    ) -> DomainResult<AnnouncementSummary> {
        if !self.policy.authorize(caps) {
            return Err(DomainError::Unauthorized);
        }

        let channels = self.gateway.list_channels().await?;
        let text_channels: Vec<_> = channels
            .into_iter()
            .filter(|c| c.kind == ChannelKind::Text)
            .collect();

        let targets: Vec<_> = match channel_names {
            Some(names) => {
                let mut targets = Vec::with_capacity(names.len());
                for name in names {
                    let name = name.trim();
                    let Some(channel) = text_channels.iter().find(|c| c.name == name) else {
                        return Err(DomainError::ValidationFailed(format!(
                            "Channel \"{name}\" not found"
                        )));
                    };
                    targets.push(channel.clone());
                }
                targets
            }
            None => text_channels,
        };

        let embed = Embed::new("Announcement", message)
            .with_footer(format!("Announced by {announced_by}"));

        let mut sent = 0;
        for channel in &targets {
            match self.gateway.send_embed(&channel.id, None, &embed).await {
                Ok(_) => sent += 1,
                Err(e) => error!(channel = %channel.name, "error sending announcement: {e}"),
            }
        }

        info!(sent, total = targets.len(), "announcement broadcast finished");
        Ok(AnnouncementSummary { sent, total: targets.len() })
    }
}
