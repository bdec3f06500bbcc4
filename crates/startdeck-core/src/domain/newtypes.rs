//! Domain newtypes for entity identifiers
//!
//! Every syncable entity carries two identifiers:
//!
//! - [`LocalId`] - assigned by the client when the entity is created
//!   offline. This is the UI's stable identity: render keys and references
//!   from other local entities (e.g. a bookmark's parent) point at it.
//! - [`RemoteId`] - assigned by the server the first time the entity
//!   round-trips successfully. Absent until then.
//!
//! Both are opaque strings. Local ids are minted as UUIDv4; remote ids are
//! whatever the server hands back and are never inspected.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;

// ============================================================================
// LocalId
// ============================================================================

/// Client-assigned identifier, stable across merges
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalId(String);

impl LocalId {
    /// Mints a fresh random local id (UUIDv4)
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string
    ///
    /// Returns an error if the string is empty. No other shape is imposed:
    /// ids created by older client versions are accepted as-is.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidId("empty local id".to_string()));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LocalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RemoteId
// ============================================================================

/// Server-assigned canonical identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteId(String);

impl RemoteId {
    /// Wraps a server-issued identifier string
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidId("empty remote id".to_string()));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RemoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
