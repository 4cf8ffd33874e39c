//! Implementation of the `jamkeeper poll` command.

use anyhow::{anyhow, Context, Result};

use crate::cli::context::AppContext;
use crate::domain::models::{ChannelKind, Poll};

pub async fn execute(
    channel: String,
    question: String,
    options: Vec<String>,
    json: bool,
) -> Result<()> {
    let ctx = AppContext::init().await?;
    let gateway = ctx.gateway()?;

    let poll = Poll::new(question, options)?;

    let channel_id = gateway
        .list_channels()
        .await?
        .into_iter()
        .find(|c| c.kind == ChannelKind::Text && c.name == channel)
        .map(|c| c.id)
        .ok_or_else(|| anyhow!("Text channel \"{channel}\" not found"))?;

    let message_id = ctx
        .poll_service()?
        .post_poll(&channel_id, &poll, "console")
        .await
        .context("Failed to post poll")?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "channel": channel,
                "message_id": message_id,
                "options": poll.options.len(),
            })
        );
    } else {
        println!(
            "Poll posted to #{channel} with {} options.",
            poll.options.len()
        );
    }

    Ok(())
}
