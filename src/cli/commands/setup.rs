//! Implementation of the `jamkeeper setup` command.

use anyhow::{Context, Result};

use crate::cli::context::AppContext;
use crate::cli::types::SetupAction;

pub async fn execute(action: SetupAction, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;
    let provisioner = ctx.provisioner()?;
    let caps = ctx.operator();

    let roles = match action {
        SetupAction::Roles | SetupAction::Both => Some(
            provisioner
                .setup_roles(&caps)
                .await
                .context("Role setup failed")?,
        ),
        SetupAction::Channels => None,
    };

    // Channels after roles: channel overwrites reference the team roles.
    let channels = match action {
        SetupAction::Channels | SetupAction::Both => Some(
            provisioner
                .setup_channels(&caps)
                .await
                .context("Channel setup failed")?,
        ),
        SetupAction::Roles => None,
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "roles": roles.map(|r| serde_json::json!({
                    "created": r.roles_created,
                    "existing": r.roles_existing,
                    "members_assigned": r.members_assigned,
                    "errors": r.errors,
                })),
                "channels": channels.map(|c| serde_json::json!({
                    "text": { "created": c.text_created, "updated": c.text_updated, "skipped": c.text_skipped },
                    "voice": { "created": c.voice_created, "updated": c.voice_updated, "skipped": c.voice_skipped },
                })),
            })
        );
    } else {
        if let Some(summary) = roles {
            println!("{}", summary.format());
        }
        if let Some(summary) = channels {
            if matches!(action, SetupAction::Both) {
                println!();
            }
            println!("{}", summary.format());
        }
    }

    Ok(())
}
