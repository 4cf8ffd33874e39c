//! Poll posting: embed with numbered options and reaction slots.

use std::sync::Arc;
use tracing::warn;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Embed, Poll};
use crate::domain::ports::ChatGateway;

pub struct PollService {
    gateway: Arc<dyn ChatGateway>,
}

impl PollService {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }

    /// Post a poll embed and seed one reaction per option. Returns the
    /// message id. Reaction failures are logged, not fatal: the poll is
    /// already up and voters can still react by hand.
    pub async fn post_poll(
        &self,
        channel_id: &str,
        poll: &Poll,
        created_by: &str,
    ) -> DomainResult<String> {
        let mut description = String::from("React with the corresponding number to vote!\n");
        for (emoji, option) in poll.emoji().zip(&poll.options) {
            description.push_str(&format!("\n{emoji} {option}"));
        }

        let embed = Embed::new(&poll.question, description)
            .with_color(0x00ff00)
            .with_footer(format!("Poll created by {created_by}"));

        let message_id = self.gateway.send_embed(channel_id, None, &embed).await?;

        for emoji in poll.emoji() {
            if let Err(e) = self.gateway.add_reaction(channel_id, &message_id, emoji).await {
                warn!(emoji, "failed to seed poll reaction: {e}");
            }
        }

        Ok(message_id)
    }
}
