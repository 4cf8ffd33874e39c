//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "jamkeeper")]
#[command(about = "Jamkeeper - code jam team administration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize jamkeeper configuration and database
    Init {
        /// Force reinitialization even if already initialized
        #[arg(short, long)]
        force: bool,
    },

    /// Team management commands
    #[command(subcommand)]
    Team(TeamCommands),

    /// Team membership commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Provision roles and channels for all stored teams
    Setup {
        /// What to provision
        #[arg(value_enum, default_value_t = SetupAction::Both)]
        action: SetupAction,
    },

    /// Report teams with commits after the submission deadline
    Report,

    /// Broadcast an announcement to text channels
    Announce {
        /// Announcement text
        message: String,

        /// Restrict to these channel names (comma-separated); all text
        /// channels when omitted
        #[arg(short, long, value_delimiter = ',')]
        channels: Vec<String>,
    },

    /// Post a reaction poll to a channel
    Poll {
        /// Target text channel name
        channel: String,

        /// Poll question
        question: String,

        /// Poll options (comma-separated, 2 to 10)
        #[arg(value_delimiter = ',')]
        options: Vec<String>,
    },

    /// Schedule a reminder; the process stays alive until it is delivered
    Remind {
        /// Target text channel name
        channel: String,

        /// Reminder text
        message: String,

        /// Minutes from now (1 to 10080)
        #[arg(short, long, default_value = "60")]
        minutes: i64,

        /// Mention string prepended to the delivery, e.g. <@123>
        #[arg(long)]
        mention: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Create a team: platform role plus directory document
    Create {
        /// Team name (also the role name)
        name: String,

        /// Role color: a named color or hex code
        #[arg(short, long)]
        color: Option<String>,

        /// Repository reference (owner/name or full URL)
        #[arg(short, long)]
        repo: Option<String>,

        /// GitHub usernames (comma-separated)
        #[arg(short = 'u', long, value_delimiter = ',')]
        github_usernames: Vec<String>,

        /// Free-form status text
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Update fields of a team document
    Update {
        /// Team name
        name: String,

        /// New repository reference
        #[arg(short, long)]
        repo: Option<String>,

        /// Replace the GitHub username list (comma-separated)
        #[arg(short = 'u', long, value_delimiter = ',')]
        github_usernames: Option<Vec<String>>,

        /// New status text
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete a team: document, members, role, and text channel
    Delete {
        /// Team name
        name: String,
    },

    /// Show details for a team
    Show {
        /// Team name
        name: String,
    },

    /// List all teams
    List,

    /// List members of a team
    Members {
        /// Team name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to a team's directory document
    Add {
        /// Team name
        team: String,

        /// Platform user id
        discord_id: String,

        /// Platform username
        #[arg(short, long, default_value = "")]
        username: String,

        /// Display name shown in listings
        #[arg(short, long, default_value = "")]
        display_name: String,
    },

    /// Remove a member from a team
    Remove {
        /// Team name
        team: String,

        /// Platform user id
        discord_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SetupAction {
    /// Create missing roles and assign them to stored members
    Roles,
    /// Create or refresh team text and voice channels
    Channels,
    /// Roles first, then channels
    Both,
}
