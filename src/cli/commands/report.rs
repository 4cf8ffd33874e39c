//! Implementation of the `jamkeeper report` command.

use anyhow::{Context, Result};

use crate::cli::context::AppContext;

pub async fn execute(json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;
    let service = ctx.deadline_service()?;

    let report = service
        .report_defaulters()
        .await
        .context("Failed to build defaulter report")?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "cutoff": ctx.config.deadline.cutoff.to_rfc3339(),
                "defaulters": report
                    .defaulters
                    .iter()
                    .map(|(name, count)| serde_json::json!({ "team": name, "commits": count }))
                    .collect::<Vec<_>>(),
                "unknown": report.unknown,
            })
        );
        return Ok(());
    }

    println!(
        "Submission deadline: {}",
        ctx.config.deadline.cutoff.to_rfc3339()
    );
    if report.is_empty() {
        println!("No teams committed after the deadline.");
    } else {
        println!("Teams with commits after the deadline:\n");
        println!("{}", report.format());
    }
    if !report.unknown.is_empty() {
        println!("\nCould not evaluate: {}", report.unknown.join(", "));
    }

    Ok(())
}
