//! Cancellable reminder scheduling.
//!
//! Each reminder is a spawned task keyed by id in a shared registry, so a
//! pending reminder can be cancelled before it fires. Reminders are not
//! persisted; a restart drops them.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Embed, Reminder};
use crate::domain::ports::ChatGateway;

type Registry = Arc<RwLock<HashMap<Uuid, PendingReminder>>>;

struct PendingReminder {
    fire_at: DateTime<Utc>,
    handle: JoinHandle<()>,
}

pub struct ReminderScheduler {
    gateway: Arc<dyn ChatGateway>,
    pending: Registry,
}

impl ReminderScheduler {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            gateway,
            pending: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Schedule a reminder. Returns its id for later cancellation.
    pub async fn schedule(&self, reminder: Reminder) -> DomainResult<Uuid> {
        let id = reminder.id;
        let fire_at = reminder.fire_at;
        let delay = reminder.delay();
        let gateway = Arc::clone(&self.gateway);
        let pending = Arc::clone(&self.pending);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let embed = Embed::new("Reminder", &reminder.message)
                .with_color(0xff0000)
                .with_footer(format!("Reminder {id}"));
            if let Err(e) = gateway
                .send_embed(&reminder.channel_id, reminder.mention.as_deref(), &embed)
                .await
            {
                error!(reminder = %id, "error delivering reminder: {e}");
            }

            pending.write().await.remove(&id);
        });

        self.pending
            .write()
            .await
            .insert(id, PendingReminder { fire_at, handle });
        info!(reminder = %id, %fire_at, "reminder scheduled");
        Ok(id)
    }

    /// Cancel a pending reminder. Returns false when the id is unknown
    /// (already fired or never scheduled).
    pub async fn cancel(&self, id: Uuid) -> bool {
        match self.pending.write().await.remove(&id) {
            Some(entry) => {
                entry.handle.abort();
                info!(reminder = %id, "reminder cancelled");
                true
            }
            None => false,
        }
    }

    /// Ids and fire times of reminders still pending.
    pub async fn active(&self) -> Vec<(Uuid, DateTime<Utc>)> {
        self.pending
            .read()
            .await
            .iter()
            .map(|(id, entry)| (*id, entry.fire_at))
            .collect()
    }
}
