//! Poll model: a question with 2 to 10 numbered options.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Numbered reaction emoji, one per option slot.
pub const NUMBER_EMOJI: [&str; 10] = [
    "1\u{fe0f}\u{20e3}",
    "2\u{fe0f}\u{20e3}",
    "3\u{fe0f}\u{20e3}",
    "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}",
    "6\u{fe0f}\u{20e3}",
    "7\u{fe0f}\u{20e3}",
    "8\u{fe0f}\u{20e3}",
    "9\u{fe0f}\u{20e3}",
    "\u{1f51f}",
];

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub question: String,
    pub options: Vec<String>,
}

impl Poll {
    /// Build a poll, trimming blank options and enforcing option bounds.
    pub fn new(question: impl Into<String>, options: Vec<String>) -> DomainResult<Self> {
        let options: Vec<String> = options
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        if options.len() < MIN_OPTIONS {
            return Err(DomainError::ValidationFailed(format!(
                "Please provide at least {MIN_OPTIONS} options"
            )));
        }
        if options.len() > MAX_OPTIONS {
            return Err(DomainError::ValidationFailed(format!(
                "Maximum {MAX_OPTIONS} options allowed"
            )));
        }

        Ok(Self {
            question: question.into(),
            options,
        })
    }

    /// Emoji for each option, in order.
    pub fn emoji(&self) -> impl Iterator<Item = &'static str> + '_ {
        NUMBER_EMOJI.iter().copied().take(self.options.len())
    }
}
