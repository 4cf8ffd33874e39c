use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Team, TeamUpdate};

/// Repository port for the team directory.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team document.
    async fn insert(&self, team: &Team) -> DomainResult<()>;

    /// Get a team by name.
    async fn get(&self, name: &str) -> DomainResult<Option<Team>>;

    /// Apply a partial update to a team. Errors when the team is missing.
    async fn update(&self, name: &str, update: &TeamUpdate) -> DomainResult<()>;

    /// Delete a team by name. Errors when the team is missing.
    async fn delete(&self, name: &str) -> DomainResult<()>;

    /// List all teams, ordered by name.
    async fn list(&self) -> DomainResult<Vec<Team>>;
}
