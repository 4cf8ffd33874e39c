//! Jamkeeper - Code Jam Team Administration Bot
//!
//! Jamkeeper manages teams for hackathon-style events on a chat platform:
//! per-team roles and channels, membership tracking, announcements, polls,
//! reminders, and a commit-deadline compliance report backed by a
//! code-hosting HTTP API.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure business logic and domain models
//! - **Service Layer** (`services`): Business logic coordination
//! - **Adapter Layer** (`adapters`): External integrations (sqlite, GitHub,
//!   Discord REST)
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::authz::{AuthzPolicy, Capabilities};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{Commit, Config, RepoRef, Team, TeamMember, TeamUpdate};
pub use domain::ports::{ChatGateway, CommitClient, FetchOutcome, MemberRepository, TeamRepository};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::deadline::{count_after_deadline, DeadlineService, DefaulterReport};
