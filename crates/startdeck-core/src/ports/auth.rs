//! Authentication context port (driven/secondary port)
//!
//! The sync engine never authenticates anyone; it only asks whether the
//! surrounding application currently has an authenticated session. The
//! session epoch lets one-shot-per-session logic (the initial full pull)
//! re-arm when the user logs out and back in.

/// Read-only view of the surrounding application's auth state
pub trait IAuthContext: Send + Sync {
    /// Returns true while the user has an authenticated session
    fn is_authenticated(&self) -> bool;

    /// Monotonic counter bumped on every fresh login
    ///
    /// Two calls observing the same epoch are in the same authenticated
    /// session; a changed epoch means a logout/login happened in between.
    fn session_epoch(&self) -> u64;
}
