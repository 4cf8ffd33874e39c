//! Implementation of the `jamkeeper announce` command.

use anyhow::{Context, Result};

use crate::cli::context::AppContext;

pub async fn execute(message: String, channels: Vec<String>, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;
    let announcer = ctx.announcer()?;

    let names = if channels.is_empty() {
        None
    } else {
        Some(channels.as_slice())
    };

    let summary = announcer
        .announce(&ctx.operator(), &message, names, "console")
        .await
        .context("Announcement failed")?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "sent": summary.sent, "total": summary.total })
        );
    } else {
        println!("Announcement sent to {}/{} channels.", summary.sent, summary.total);
    }

    Ok(())
}
