//! SQLite implementation of the MemberRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::TeamMember;
use crate::domain::ports::MemberRepository;

#[derive(Clone)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    team_name: String,
    discord_id: String,
    discord_username: String,
    display_name: String,
    added_at: String,
}

impl TryFrom<MemberRow> for TeamMember {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let added_at = DateTime::parse_from_rfc3339(&row.added_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DomainError::InvalidTimestamp(format!("{}: {e}", row.added_at)))?;
        Ok(TeamMember {
            team_name: row.team_name,
            discord_id: row.discord_id,
            discord_username: row.discord_username,
            display_name: row.display_name,
            added_at,
        })
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn add(&self, member: &TeamMember) -> DomainResult<()> {
        let result = sqlx::query(
            r#"INSERT INTO team_members (team_name, discord_id, discord_username, display_name, added_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&member.team_name)
        .bind(&member.discord_id)
        .bind(&member.discord_username)
        .bind(&member.display_name)
        .bind(member.added_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::MemberExists {
                    team: member.team_name.clone(),
                    discord_id: member.discord_id.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, team_name: &str, discord_id: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_name = ? AND discord_id = ?")
            .bind(team_name)
            .bind(discord_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_all(&self, team_name: &str) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_name = ?")
            .bind(team_name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self, team_name: &str) -> DomainResult<Vec<TeamMember>> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            "SELECT * FROM team_members WHERE team_name = ? ORDER BY added_at",
        )
        .bind(team_name)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TeamMember::try_from).collect()
    }

    async fn exists(&self, team_name: &str, discord_id: &str) -> DomainResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM team_members WHERE team_name = ? AND discord_id = ? LIMIT 1",
        )
        .bind(team_name)
        .bind(discord_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }
}
