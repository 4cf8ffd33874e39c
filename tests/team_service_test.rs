//! Team lifecycle tests over the in-memory doubles.

mod common;

use std::sync::Arc;

use common::{FakeGateway, InMemoryMemberRepository, InMemoryTeamRepository};
use jamkeeper::domain::authz::{AuthzPolicy, Capabilities};
use jamkeeper::domain::errors::DomainError;
use jamkeeper::domain::models::{ChannelKind, TeamMember, TeamUpdate};
use jamkeeper::domain::ports::{MemberRepository, TeamRepository};
use jamkeeper::services::{CreateTeam, TeamService, UpdateOutcome};

struct Fixture {
    teams: Arc<InMemoryTeamRepository>,
    members: Arc<InMemoryMemberRepository>,
    gateway: Arc<FakeGateway>,
    service: TeamService,
}

fn fixture() -> Fixture {
    let teams = Arc::new(InMemoryTeamRepository::new());
    let members = Arc::new(InMemoryMemberRepository::new());
    let gateway = Arc::new(FakeGateway::new());
    let teams_port: Arc<dyn jamkeeper::domain::ports::TeamRepository> = teams.clone();
    let members_port: Arc<dyn jamkeeper::domain::ports::MemberRepository> = members.clone();
    let gateway_port: Arc<dyn jamkeeper::domain::ports::ChatGateway> = gateway.clone();
    let service = TeamService::new(
        teams_port,
        members_port,
        gateway_port,
        AuthzPolicy::new(vec!["CT25".to_string(), "CT26".to_string()]),
    );
    Fixture { teams, members, gateway, service }
}

fn organizer() -> Capabilities {
    Capabilities::with_roles(["CT25"])
}

#[tokio::test]
async fn test_create_team_makes_role_and_document() {
    let fx = fixture();

    let team = fx
        .service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rustaceans".to_string(),
                color: Some("teal".to_string()),
                github_repo: Some("acme/widget".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(team.name, "Rustaceans");
    assert!(fx.teams.get("Rustaceans").await.unwrap().is_some());
    assert_eq!(fx.gateway.roles.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_team_rejects_existing_role() {
    let fx = fixture();
    fx.gateway.seed_role("r1", "Rustaceans");

    let err = fx
        .service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rustaceans".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::TeamExists(_)));
    // Nothing was written.
    assert!(fx.teams.get("Rustaceans").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_team_rejects_bad_color() {
    let fx = fixture();

    let err = fx
        .service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rustaceans".to_string(),
                color: Some("not-a-color".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ValidationFailed(_)));
    assert!(fx.gateway.roles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unprivileged_caller_denied() {
    let fx = fixture();

    let err = fx
        .service
        .create_team(
            &Capabilities::with_roles(["Member"]),
            CreateTeam {
                name: "Rustaceans".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_update_team_partial_and_noop() {
    let fx = fixture();
    fx.service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rustaceans".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let outcome = fx
        .service
        .update_team(
            &organizer(),
            "Rustaceans",
            TeamUpdate {
                status: Some("submitted".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated);

    let team = fx.teams.get("Rustaceans").await.unwrap().unwrap();
    assert_eq!(team.status.as_deref(), Some("submitted"));

    let outcome = fx
        .service
        .update_team(&organizer(), "Rustaceans", TeamUpdate::default())
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NothingToUpdate);
}

#[tokio::test]
async fn test_update_unknown_team_errors() {
    let fx = fixture();
    let err = fx
        .service
        .update_team(&organizer(), "Ghost", TeamUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::TeamNotFound(_)));
}

#[tokio::test]
async fn test_delete_team_cleans_everything_up() {
    let fx = fixture();
    fx.service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rust Raiders".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    fx.service
        .add_member(
            &organizer(),
            TeamMember::new("Rust Raiders", "42", "ferris", "Ferris"),
        )
        .await
        .unwrap();
    fx.gateway
        .seed_channel("c1", "rust-raiders", ChannelKind::Text, Some("cat"), 2);

    fx.service
        .delete_team(&organizer(), "Rust Raiders")
        .await
        .unwrap();

    assert!(fx.teams.get("Rust Raiders").await.unwrap().is_none());
    assert!(fx.members.list("Rust Raiders").await.unwrap().is_empty());
    assert_eq!(fx.gateway.deleted_roles.lock().unwrap().len(), 1);
    assert_eq!(
        fx.gateway.deleted_channels.lock().unwrap().as_slice(),
        ["c1"]
    );
}

#[tokio::test]
async fn test_add_member_twice_rejected() {
    let fx = fixture();
    fx.service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rustaceans".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let member = TeamMember::new("Rustaceans", "42", "ferris", "Ferris");
    fx.service.add_member(&organizer(), member.clone()).await.unwrap();
    let err = fx.service.add_member(&organizer(), member).await.unwrap_err();

    assert!(matches!(err, DomainError::MemberExists { .. }));
}

#[tokio::test]
async fn test_remove_absent_member_errors() {
    let fx = fixture();
    fx.service
        .create_team(
            &organizer(),
            CreateTeam {
                name: "Rustaceans".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = fx
        .service
        .remove_member(&organizer(), "Rustaceans", "42")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::MemberNotFound { .. }));
}
