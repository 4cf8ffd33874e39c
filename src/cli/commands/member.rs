//! Implementation of the `jamkeeper member` subcommands.

use anyhow::{Context, Result};

use crate::cli::context::AppContext;
use crate::cli::types::MemberCommands;
use crate::domain::errors::DomainError;
use crate::domain::models::TeamMember;

pub async fn execute(command: MemberCommands, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match command {
        MemberCommands::Add { team, discord_id, username, display_name } => {
            // Directory-only operation; the role itself is assigned by
            // `setup roles`. No gateway needed.
            if ctx.teams.get(&team).await?.is_none() {
                return Err(DomainError::TeamNotFound(team).into());
            }
            if ctx.members.exists(&team, &discord_id).await? {
                return Err(DomainError::MemberExists { team, discord_id }.into());
            }

            let member = TeamMember::new(&team, &discord_id, username, display_name);
            ctx.members
                .add(&member)
                .await
                .context("Failed to add member")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&member)?);
            } else {
                println!("Added {discord_id} to \"{team}\".");
            }
        }

        MemberCommands::Remove { team, discord_id } => {
            if ctx.teams.get(&team).await?.is_none() {
                return Err(DomainError::TeamNotFound(team).into());
            }
            if !ctx.members.remove(&team, &discord_id).await? {
                return Err(DomainError::MemberNotFound { team, discord_id }.into());
            }

            if json {
                println!(
                    "{}",
                    serde_json::json!({ "removed": discord_id, "team": team })
                );
            } else {
                println!("Removed {discord_id} from \"{team}\".");
            }
        }
    }

    Ok(())
}
