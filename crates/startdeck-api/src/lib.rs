//! Dashboard API adapter
//!
//! HTTP implementation of the `IRemoteClient` port against the dashboard's
//! authenticated sync endpoints.

pub mod client;

pub use client::ApiClient;
