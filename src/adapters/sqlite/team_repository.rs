//! SQLite implementation of the TeamRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Team, TeamUpdate};
use crate::domain::ports::TeamRepository;

#[derive(Clone)]
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    name: String,
    github_repo: Option<String>,
    github_usernames: String,
    status: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<TeamRow> for Team {
    type Error = DomainError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        Ok(Team {
            name: row.name,
            github_repo: row.github_repo,
            github_usernames: serde_json::from_str(&row.github_usernames)?,
            status: row.status,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidTimestamp(format!("{raw}: {e}")))
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn insert(&self, team: &Team) -> DomainResult<()> {
        let usernames_json = serde_json::to_string(&team.github_usernames)?;

        let result = sqlx::query(
            r#"INSERT INTO teams (name, github_repo, github_usernames, status, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&team.name)
        .bind(&team.github_repo)
        .bind(&usernames_json)
        .bind(&team.status)
        .bind(team.created_at.to_rfc3339())
        .bind(team.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::TeamExists(team.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, name: &str) -> DomainResult<Option<Team>> {
        let row: Option<TeamRow> = sqlx::query_as("SELECT * FROM teams WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Team::try_from).transpose()
    }

    async fn update(&self, name: &str, update: &TeamUpdate) -> DomainResult<()> {
        let Some(mut team) = self.get(name).await? else {
            return Err(DomainError::TeamNotFound(name.to_string()));
        };
        update.apply(&mut team);

        let usernames_json = serde_json::to_string(&team.github_usernames)?;
        sqlx::query(
            r#"UPDATE teams SET github_repo = ?, github_usernames = ?, status = ?, updated_at = ?
               WHERE name = ?"#,
        )
        .bind(&team.github_repo)
        .bind(&usernames_json)
        .bind(&team.status)
        .bind(team.updated_at.to_rfc3339())
        .bind(name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, name: &str) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TeamNotFound(name.to_string()));
        }

        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Team>> {
        let rows: Vec<TeamRow> = sqlx::query_as("SELECT * FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Team::try_from).collect()
    }
}
