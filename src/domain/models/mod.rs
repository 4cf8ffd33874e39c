pub mod color;
pub mod commit;
pub mod config;
pub mod message;
pub mod poll;
pub mod reminder;
pub mod team;

pub use color::RoleColor;
pub use commit::{Commit, RepoRef};
pub use config::{AuthzConfig, Config, DatabaseConfig, DeadlineConfig, DiscordConfig, GithubConfig, LoggingConfig};
pub use message::{ChannelKind, ChannelSpec, Embed, PermissionOverwrite, RoleSpec};
pub use poll::Poll;
pub use reminder::Reminder;
pub use team::{Team, TeamMember, TeamUpdate};
