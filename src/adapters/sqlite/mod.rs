//! SQLite adapters for the team directory.

pub mod connection;
pub mod member_repository;
pub mod migrations;
pub mod team_repository;

pub use connection::Database;
pub use member_repository::SqliteMemberRepository;
pub use migrations::{initial_schema_migration, Migration, MigrationError, Migrator};
pub use team_repository::SqliteTeamRepository;
