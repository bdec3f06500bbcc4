//! Startdeck Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Task`, `Bookmark`, cosmetic descriptors, `SyncStatus`
//! - **Port definitions** - Traits for adapters: `IRemoteClient`, `ILocalStore`,
//!   `IEventBus`, `IAuthContext`
//! - **Configuration** - YAML-backed settings for the sync engine
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement. The sync engine
//! in `startdeck-sync` orchestrates domain entities through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
