//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates. Host applications can depend on `mstorage-client` and get
//! the capability traits, the media storage client, and (with the default
//! `desktop` feature) the reqwest-based transport without wiring each crate
//! individually.

pub use bridge_traits;
pub use provider_mstorage;

#[cfg(feature = "desktop")]
pub use bridge_desktop;
