//! Room Service Module
//!
//! Lifecycle and status history of campus rooms. A room is created together
//! with its ownership metadata, soft-deleted by deactivating that metadata,
//! and accumulates submitter-attributed status reports over time.

// Public exports
pub mod contract;
pub use contract::{
    client::RoomsApi, error::RoomError, BuildingRef, ResourceMetadata, ResourceState, Room,
    RoomStatus,
};

pub mod module;
pub use module::RoomServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
