//! Implementation of the `jamkeeper init` command.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::sqlite::Database;
use crate::domain::models::Config;

pub async fn execute(force: bool, json: bool) -> Result<()> {
    let dir = PathBuf::from(".jamkeeper");
    let config_path = dir.join("config.yaml");

    if config_path.exists() && !force {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "success": false,
                    "message": "Already initialized. Use --force to reinitialize."
                })
            );
        } else {
            println!("Already initialized. Use --force to reinitialize.");
        }
        return Ok(());
    }

    fs::create_dir_all(&dir)
        .await
        .context("Failed to create .jamkeeper directory")?;

    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize default config")?;
    fs::write(&config_path, yaml)
        .await
        .context("Failed to write .jamkeeper/config.yaml")?;

    let database = Database::connect(&format!("sqlite:{}", config.database.path), 1)
        .await
        .context("Failed to create database")?;
    database.migrate().await.context("Failed to run migrations")?;
    database.close().await;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "success": true,
                "config": config_path.display().to_string(),
                "database": config.database.path,
            })
        );
    } else {
        println!("Initialized jamkeeper.");
        println!("  Config:   {}", config_path.display());
        println!("  Database: {}", config.database.path);
        println!("\nSet guild_id in the config and JAMKEEPER_DISCORD__TOKEN in the environment.");
    }

    Ok(())
}
