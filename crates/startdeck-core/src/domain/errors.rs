//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including identifier parsing and validation failures.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Unknown priority name
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Unknown bookmark kind name
    #[error("Invalid bookmark kind: {0}")]
    InvalidBookmarkKind(String),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
