//! Local persistence adapters
//!
//! Two implementations of the `ILocalStore` port:
//!
//! - [`FileStore`] keeps one JSON file per storage slot under a data
//!   directory (`~/.local/share/startdeck/` by default). A missing file
//!   reads as an absent slot, never an error.
//! - [`MemoryStore`] keeps slots in a `HashMap` behind a mutex. Used by the
//!   sync engine's tests and anywhere a throwaway store is convenient.
//!
//! Both stores treat values as opaque `serde_json::Value` blobs; shaping
//! them into domain types is the caller's concern.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
