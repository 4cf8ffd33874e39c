pub mod discord;
pub mod github;
pub mod sqlite;
