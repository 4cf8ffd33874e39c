//! Announcement, poll, and reminder delivery tests over the fake guild.

mod common;

use std::sync::Arc;

use common::FakeGateway;
use jamkeeper::domain::authz::{AuthzPolicy, Capabilities};
use jamkeeper::domain::errors::DomainError;
use jamkeeper::domain::models::{ChannelKind, Poll, Reminder};
use jamkeeper::services::{Announcer, PollService, ReminderScheduler};

fn policy() -> AuthzPolicy {
    AuthzPolicy::new(vec!["CT25".to_string()])
}

fn seeded_gateway() -> Arc<FakeGateway> {
    let gateway = Arc::new(FakeGateway::new());
    gateway.seed_channel("c1", "general", ChannelKind::Text, None, 0);
    gateway.seed_channel("c2", "rustaceans", ChannelKind::Text, Some("cat"), 2);
    gateway.seed_channel("v1", "Rustaceans Voice", ChannelKind::Voice, Some("cat"), 2);
    gateway
}

#[tokio::test]
async fn test_announce_to_all_text_channels() {
    let gateway = seeded_gateway();
    let announcer = Announcer::new(gateway.clone(), policy());

    let summary = announcer
        .announce(&Capabilities::administrator(), "Kickoff at noon", None, "orga")
        .await
        .unwrap();

    assert_eq!(summary.sent, 2);
    assert_eq!(summary.total, 2);

    let sent = gateway.sent.lock().unwrap();
    // Voice channels are never targeted.
    assert!(sent.iter().all(|(id, _, _)| id != "v1"));
    assert_eq!(sent[0].2.title, "Announcement");
    assert_eq!(sent[0].2.footer.as_deref(), Some("Announced by orga"));
}

#[tokio::test]
async fn test_announce_to_named_subset() {
    let gateway = seeded_gateway();
    let announcer = Announcer::new(gateway.clone(), policy());

    let summary = announcer
        .announce(
            &Capabilities::with_roles(["CT25"]),
            "Team sync",
            Some(&["rustaceans".to_string()]),
            "orga",
        )
        .await
        .unwrap();

    assert_eq!(summary.sent, 1);
    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "c2");
}

#[tokio::test]
async fn test_announce_unknown_channel_sends_nothing() {
    let gateway = seeded_gateway();
    let announcer = Announcer::new(gateway.clone(), policy());

    let err = announcer
        .announce(
            &Capabilities::administrator(),
            "Team sync",
            Some(&["rustaceans".to_string(), "nope".to_string()]),
            "orga",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ValidationFailed(_)));
    // Validation happens before any send.
    assert!(gateway.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_announce_requires_privilege() {
    let gateway = seeded_gateway();
    let announcer = Announcer::new(gateway, policy());

    let err = announcer
        .announce(&Capabilities::with_roles(["Member"]), "hi", None, "nobody")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_poll_posts_embed_and_seeds_reactions() {
    let gateway = seeded_gateway();
    let service = PollService::new(gateway.clone());
    let poll = Poll::new(
        "Lunch?",
        vec!["pizza".to_string(), "sushi".to_string(), "salad".to_string()],
    )
    .unwrap();

    let message_id = service.post_poll("c1", &poll, "orga").await.unwrap();

    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].2.title, "Lunch?");
    assert!(sent[0].2.description.contains("pizza"));
    assert_eq!(sent[0].2.footer.as_deref(), Some("Poll created by orga"));

    let reactions = gateway.reactions.lock().unwrap();
    assert_eq!(reactions.len(), 3);
    assert!(reactions.iter().all(|(_, mid, _)| *mid == message_id));
    assert_eq!(reactions[0].2, "1\u{fe0f}\u{20e3}");
}

#[tokio::test(start_paused = true)]
async fn test_reminder_fires_after_delay() {
    let gateway = seeded_gateway();
    let scheduler = ReminderScheduler::new(gateway.clone());

    let reminder = Reminder::new("c1", Some("<@42>".to_string()), "standup", 5).unwrap();
    let id = scheduler.schedule(reminder).await.unwrap();
    assert_eq!(scheduler.active().await.len(), 1);

    tokio::time::sleep(std::time::Duration::from_secs(5 * 60 + 1)).await;
    tokio::task::yield_now().await;

    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "c1");
    assert_eq!(sent[0].1.as_deref(), Some("<@42>"));
    assert_eq!(sent[0].2.title, "Reminder");
    drop(sent);

    assert!(!scheduler.active().await.iter().any(|(rid, _)| *rid == id));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_reminder_never_fires() {
    let gateway = seeded_gateway();
    let scheduler = ReminderScheduler::new(gateway.clone());

    let reminder = Reminder::new("c1", None, "standup", 5).unwrap();
    let id = scheduler.schedule(reminder).await.unwrap();

    assert!(scheduler.cancel(id).await);
    // Second cancel finds nothing.
    assert!(!scheduler.cancel(id).await);

    tokio::time::sleep(std::time::Duration::from_secs(10 * 60)).await;
    tokio::task::yield_now().await;

    assert!(gateway.sent.lock().unwrap().is_empty());
    assert!(scheduler.active().await.is_empty());
}
