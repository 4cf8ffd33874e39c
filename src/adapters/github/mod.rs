//! GitHub commit-listing adapter.

pub mod client;
pub mod types;

pub use client::{GithubClientConfig, GithubCommitClient};
