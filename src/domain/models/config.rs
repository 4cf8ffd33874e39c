//! Typed configuration model with serde defaults.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Guild (server) id the bot operates in.
    pub guild_id: String,

    /// Category the team channels live under.
    pub category_name: String,

    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub discord: DiscordConfig,
    pub github: GithubConfig,
    pub authz: AuthzConfig,
    pub deadline: DeadlineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guild_id: String::new(),
            category_name: "CodeJam".to_string(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            discord: DiscordConfig::default(),
            github: GithubConfig::default(),
            authz: AuthzConfig::default(),
            deadline: DeadlineConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database path.
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: ".jamkeeper/jamkeeper.db".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error.
    pub level: String,
    /// One of: json, pretty.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Bot token. Not validated at startup; requests fail and degrade.
    pub token: String,
    pub api_url: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: "https://discord.com/api/v10".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Personal access token for the commit-listing API.
    pub token: Option<String>,
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: "https://api.github.com".to_string(),
        }
    }
}

/// Data-driven authorization rule: administrator always passes, otherwise
/// one of these role names must be held.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthzConfig {
    pub allowed_roles: Vec<String>,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            allowed_roles: vec!["CT25".to_string(), "CT26".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlineConfig {
    /// Submission deadline all commit timestamps are compared against.
    pub cutoff: DateTime<Utc>,
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        Self {
            cutoff: Utc.with_ymd_and_hms(2025, 12, 23, 14, 30, 0).unwrap(),
        }
    }
}
