//! Port definitions (hexagonal architecture)
//!
//! These traits are the seams between the sync engine and its external
//! collaborators. Adapter crates implement them; the engine only ever sees
//! `Arc<dyn Trait>`.

pub mod auth;
pub mod event_bus;
pub mod local_store;
pub mod remote_client;

pub use auth::IAuthContext;
pub use event_bus::{DomainEvent, IEventBus};
pub use local_store::{ILocalStore, StoreKey};
pub use remote_client::{IRemoteClient, SyncSnapshot, WireBookmark, WireTask};
