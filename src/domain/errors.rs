//! Domain errors for the jamkeeper system.

use thiserror::Error;

/// Domain-level errors that can occur in the jamkeeper system.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Team already exists: {0}")]
    TeamExists(String),

    #[error("Member {discord_id} not found in team {team}")]
    MemberNotFound { team: String, discord_id: String },

    #[error("Member {discord_id} is already in team {team}")]
    MemberExists { team: String, discord_id: String },

    #[error("Not authorized: requires administrator or one of the organizer roles")]
    Unauthorized,

    #[error("Invalid repository reference: {0}")]
    InvalidRepoRef(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Chat gateway error: {0}")]
    GatewayError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<crate::domain::ports::GatewayError> for DomainError {
    fn from(err: crate::domain::ports::GatewayError) -> Self {
        DomainError::GatewayError(err.to_string())
    }
}
