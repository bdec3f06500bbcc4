//! Task domain entity
//!
//! Tasks are created offline with a fresh [`LocalId`] and no remote id.
//! Once a push succeeds, the server assigns a [`RemoteId`]; subsequent
//! pushes include it so the server updates in place instead of duplicating.
//!
//! Locally deleted tasks are kept as tombstones in a separate durable list
//! (same shape as `Task`) so the removal intent survives a failed push. The
//! tombstone list is cleared only after the server confirms the push.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{LocalId, RemoteId};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(DomainError::InvalidPriority(other.to_string())),
        }
    }
}

/// A single to-do item on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Client-assigned identity, stable across merges
    pub local_id: LocalId,
    /// Server-assigned identity; `None` until the first successful round trip
    pub remote_id: Option<RemoteId>,
    /// Task text
    pub text: String,
    /// Optional user-defined category
    pub category: Option<String>,
    /// The day this task belongs to
    pub date: NaiveDate,
    /// Free-form notes
    pub notes: Option<String>,
    /// Priority level
    pub priority: Priority,
    /// Whether the task is done
    pub completed: bool,
    /// Position within the day's list
    pub order: u32,
}

impl Task {
    /// Creates a new locally-authored task with a fresh local id
    pub fn new(text: impl Into<String>, date: NaiveDate, order: u32) -> Self {
        Self {
            local_id: LocalId::generate(),
            remote_id: None,
            text: text.into(),
            category: None,
            date,
            notes: None,
            priority: Priority::default(),
            completed: false,
            order,
        }
    }

    /// Returns true if this task has round-tripped through the server
    pub fn is_synced(&self) -> bool {
        self.remote_id.is_some()
    }
}
