//! Implementation of the `jamkeeper remind` command.
//!
//! Reminders are in-process only, so the command stays alive until the
//! reminder has been delivered.

use anyhow::{anyhow, Result};
use std::time::Duration;

use crate::cli::context::AppContext;
use crate::domain::models::{ChannelKind, Reminder};
use crate::services::ReminderScheduler;

pub async fn execute(
    channel: String,
    message: String,
    minutes: i64,
    mention: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = AppContext::init().await?;
    let gateway = ctx.gateway()?;

    let channel_id = gateway
        .list_channels()
        .await?
        .into_iter()
        .find(|c| c.kind == ChannelKind::Text && c.name == channel)
        .map(|c| c.id)
        .ok_or_else(|| anyhow!("Text channel \"{channel}\" not found"))?;

    let reminder = Reminder::new(channel_id, mention, message, minutes)?;
    let fire_at = reminder.fire_at;

    let scheduler = ReminderScheduler::new(gateway);
    let id = scheduler.schedule(reminder).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "id": id,
                "channel": channel,
                "fire_at": fire_at.to_rfc3339(),
            })
        );
    } else {
        println!(
            "Reminder {id} set for {} (in {minutes} minute{}).",
            fire_at.to_rfc3339(),
            if minutes == 1 { "" } else { "s" }
        );
    }

    // Block until the scheduler has delivered it and removed the entry.
    while scheduler.active().await.iter().any(|(rid, _)| *rid == id) {
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Ok(())
}
