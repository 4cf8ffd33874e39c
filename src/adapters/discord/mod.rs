//! Discord REST adapter for the chat gateway port.

pub mod gateway;
pub mod types;

pub use gateway::{DiscordGatewayConfig, DiscordRestGateway};
