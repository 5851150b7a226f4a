//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the room service.
//! NO HTTP - direct function calls for performance.

use super::{
    error::RoomError,
    model::{Room, RoomStatus},
};
use async_trait::async_trait;

/// Room service API for inter-module communication
#[async_trait]
pub trait RoomsApi: Send + Sync {
    // ===== Room Operations =====

    /// List every room
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError>;

    /// Get a room by identifier
    async fn get_room(&self, id: i32) -> Result<Room, RoomError>;

    /// Get a room by its room number
    async fn get_room_by_number(&self, room_number: &str) -> Result<Room, RoomError>;

    /// Rooms with exactly the given capacity
    async fn find_rooms_by_max_occupancy(&self, occupancy: i32) -> Result<Vec<Room>, RoomError>;

    /// Rooms owned by the given owner
    async fn find_rooms_by_owner(&self, owner_id: i32) -> Result<Vec<Room>, RoomError>;

    /// Create a room together with its metadata and initial statuses
    async fn create_room(&self, room: Room) -> Result<Room, RoomError>;

    /// Update a room; its building cannot change
    async fn update_room(&self, room: Room) -> Result<Room, RoomError>;

    /// Deactivate a room (soft delete)
    async fn deactivate_room(&self, id: i32) -> Result<Room, RoomError>;

    // ===== Room Status Operations =====

    /// List every status report
    async fn list_statuses(&self) -> Result<Vec<RoomStatus>, RoomError>;

    /// Get a status report, if present
    async fn get_status(&self, id: i32) -> Result<Option<RoomStatus>, RoomError>;

    /// Status reports filed by a submitter
    async fn find_statuses_by_submitter(&self, submitter_id: i32)
        -> Result<Vec<RoomStatus>, RoomError>;

    /// Status reports submitted at exactly the given timestamp string
    async fn find_statuses_by_date(&self, date: &str) -> Result<Vec<RoomStatus>, RoomError>;

    /// Record a status report
    async fn record_status(&self, status: RoomStatus) -> Result<RoomStatus, RoomError>;
}
