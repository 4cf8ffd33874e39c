//! Reminder model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

pub const MIN_MINUTES: i64 = 1;
/// Seven days.
pub const MAX_MINUTES: i64 = 10_080;

/// A scheduled reminder, keyed by id so it can be cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    /// Channel to deliver the reminder to.
    pub channel_id: String,
    /// Mention string prepended to the delivery, e.g. a user mention.
    pub mention: Option<String>,
    pub message: String,
    pub fire_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Build a reminder firing `minutes` from now. Bounds: 1 minute to 7 days.
    pub fn new(
        channel_id: impl Into<String>,
        mention: Option<String>,
        message: impl Into<String>,
        minutes: i64,
    ) -> DomainResult<Self> {
        if minutes < MIN_MINUTES {
            return Err(DomainError::ValidationFailed(
                "Time must be at least 1 minute".to_string(),
            ));
        }
        if minutes > MAX_MINUTES {
            return Err(DomainError::ValidationFailed(format!(
                "Maximum reminder time is 7 days ({MAX_MINUTES} minutes)"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            channel_id: channel_id.into(),
            mention,
            message: message.into(),
            fire_at: now + Duration::minutes(minutes),
            created_at: now,
        })
    }

    /// Time left until the reminder fires; zero when already due.
    pub fn delay(&self) -> std::time::Duration {
        (self.fire_at - Utc::now())
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}
