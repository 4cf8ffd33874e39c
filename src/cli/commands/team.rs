//! Implementation of the `jamkeeper team` subcommands.

use anyhow::{Context, Result};

use crate::cli::context::AppContext;
use crate::cli::output::{format_member_table, format_team_table};
use crate::cli::types::TeamCommands;
use crate::domain::models::TeamUpdate;
use crate::services::{CreateTeam, UpdateOutcome};

pub async fn execute(command: TeamCommands, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match command {
        TeamCommands::Create { name, color, repo, github_usernames, status } => {
            let service = ctx.team_service()?;
            let team = service
                .create_team(
                    &ctx.operator(),
                    CreateTeam {
                        name,
                        color,
                        github_repo: repo,
                        github_usernames,
                        status,
                    },
                )
                .await
                .context("Failed to create team")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&team)?);
            } else {
                println!("Team \"{}\" created.", team.name);
            }
        }

        TeamCommands::Update { name, repo, github_usernames, status } => {
            let service = ctx.team_service()?;
            let update = TeamUpdate {
                github_repo: repo,
                github_usernames,
                status,
            };
            let outcome = service
                .update_team(&ctx.operator(), &name, update)
                .await
                .context("Failed to update team")?;

            let message = match outcome {
                UpdateOutcome::Updated => format!("Team \"{name}\" updated."),
                UpdateOutcome::NothingToUpdate => "Nothing to update.".to_string(),
            };
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "updated": outcome == UpdateOutcome::Updated,
                        "message": message,
                    })
                );
            } else {
                println!("{message}");
            }
        }

        TeamCommands::Delete { name } => {
            let service = ctx.team_service()?;
            service
                .delete_team(&ctx.operator(), &name)
                .await
                .context("Failed to delete team")?;

            if json {
                println!("{}", serde_json::json!({ "deleted": name }));
            } else {
                println!("Team \"{name}\" deleted.");
            }
        }

        // Read-only commands go straight to the directory; no gateway (and
        // therefore no bot token) needed.
        TeamCommands::Show { name } => {
            let team = ctx
                .teams
                .get(&name)
                .await?
                .ok_or(crate::domain::errors::DomainError::TeamNotFound(name))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&team)?);
            } else {
                println!("Team:       {}", team.name);
                println!(
                    "Repository: {}",
                    team.github_repo.as_deref().unwrap_or("-")
                );
                println!(
                    "Usernames:  {}",
                    if team.github_usernames.is_empty() {
                        "-".to_string()
                    } else {
                        team.github_usernames.join(", ")
                    }
                );
                println!("Status:     {}", team.status.as_deref().unwrap_or("-"));
                println!("Created:    {}", team.created_at.format("%Y-%m-%d %H:%M UTC"));
                println!("Updated:    {}", team.updated_at.format("%Y-%m-%d %H:%M UTC"));
            }
        }

        TeamCommands::List => {
            let teams = ctx.teams.list().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&teams)?);
            } else if teams.is_empty() {
                println!("No teams found.");
            } else {
                println!("{}", format_team_table(&teams));
                println!(
                    "\n{} team{}",
                    teams.len(),
                    if teams.len() == 1 { "" } else { "s" }
                );
            }
        }

        TeamCommands::Members { name } => {
            // Surface TeamNotFound instead of an empty listing.
            if ctx.teams.get(&name).await?.is_none() {
                return Err(
                    crate::domain::errors::DomainError::TeamNotFound(name).into()
                );
            }
            let members = ctx.members.list(&name).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&members)?);
            } else if members.is_empty() {
                println!("Team \"{name}\" has no members.");
            } else {
                println!("{}", format_member_table(&members));
            }
        }
    }

    Ok(())
}
