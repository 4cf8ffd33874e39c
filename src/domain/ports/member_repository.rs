use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::TeamMember;

/// Repository port for team membership rows.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Add a member to a team. Errors when the pair already exists.
    async fn add(&self, member: &TeamMember) -> DomainResult<()>;

    /// Remove a member from a team. Returns false when no row matched.
    async fn remove(&self, team_name: &str, discord_id: &str) -> DomainResult<bool>;

    /// Remove every member of a team, returning the number removed.
    async fn remove_all(&self, team_name: &str) -> DomainResult<u64>;

    /// List members of a team.
    async fn list(&self, team_name: &str) -> DomainResult<Vec<TeamMember>>;

    /// Whether a member row exists for this team.
    async fn exists(&self, team_name: &str, discord_id: &str) -> DomainResult<bool>;
}
