//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{ResourceMetadata, Room, RoomStatus};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for rooms
///
/// Loaded rooms carry their resource metadata and their status reports.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// List all rooms
    async fn find_all(&self) -> Result<Vec<Room>>;

    /// Find a room by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Room>>;

    /// Find a room by room number
    async fn find_by_room_number(&self, room_number: &str) -> Result<Option<Room>>;

    /// Find all rooms with the given capacity
    async fn find_by_max_occupancy(&self, occupancy: i32) -> Result<Vec<Room>>;

    /// Insert a new room or update an existing one
    ///
    /// Only the room row and its metadata link are written; status reports
    /// are persisted through [`RoomStatusRepository`].
    async fn save(&self, room: &Room) -> Result<Room>;
}

/// Repository for room status reports
#[async_trait]
pub trait RoomStatusRepository: Send + Sync {
    /// List all status reports
    async fn find_all(&self) -> Result<Vec<RoomStatus>>;

    /// Find a status report by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<RoomStatus>>;

    /// Find all status reports filed by a submitter
    async fn find_all_by_submitter_id(&self, submitter_id: i32) -> Result<Vec<RoomStatus>>;

    /// Find all status reports with exactly this submission timestamp
    async fn find_all_by_submitted_date_time(&self, date: &str) -> Result<Vec<RoomStatus>>;

    /// Insert a new status report or update an existing one
    async fn save(&self, status: &RoomStatus) -> Result<RoomStatus>;
}

/// Repository for resource metadata
#[async_trait]
pub trait ResourceMetadataRepository: Send + Sync {
    /// Insert new metadata or update existing metadata
    async fn save(&self, metadata: &ResourceMetadata) -> Result<ResourceMetadata>;
}
