//! Domain service - business logic orchestration

use super::events::{EventPublisher, RoomEvent};
use super::metadata::MetadataService;
use super::repository::{RoomRepository, RoomStatusRepository};
use super::validation::{validate_owner_id, validate_room_id, validate_room_number};
use crate::contract::{Room, RoomError, RoomStatus};
use std::sync::Arc;

/// Domain service for room lifecycle management
pub struct Service {
    room_repo: Arc<dyn RoomRepository>,
    status_repo: Arc<dyn RoomStatusRepository>,
    metadata: Arc<MetadataService>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        room_repo: Arc<dyn RoomRepository>,
        status_repo: Arc<dyn RoomStatusRepository>,
        metadata: Arc<MetadataService>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            room_repo,
            status_repo,
            metadata,
            event_publisher,
        }
    }

    // ===== Room Queries =====

    /// List every room in store order
    pub async fn list_all(&self) -> Result<Vec<Room>, RoomError> {
        self.room_repo.find_all().await.map_err(RoomError::internal)
    }

    /// Get the room with the given room number
    pub async fn find_by_room_number(&self, room_number: &str) -> Result<Room, RoomError> {
        validate_room_number(room_number)?;

        self.room_repo
            .find_by_room_number(room_number)
            .await
            .map_err(RoomError::internal)?
            .ok_or_else(|| RoomError::NotFound {
                resource: "room".to_string(),
                id: format!("room_number={}", room_number),
            })
    }

    /// Get a room by identifier
    pub async fn find_by_id(&self, id: i32) -> Result<Room, RoomError> {
        validate_room_id(id)?;
        self.require_room(id).await
    }

    /// Rooms whose capacity equals `occupancy`
    pub async fn find_by_max_occupancy(&self, occupancy: i32) -> Result<Vec<Room>, RoomError> {
        self.room_repo
            .find_by_max_occupancy(occupancy)
            .await
            .map_err(RoomError::internal)
    }

    /// Rooms owned by `owner_id`; fails with `NotFound` when there are none
    pub async fn find_by_resource_owner(&self, owner_id: i32) -> Result<Vec<Room>, RoomError> {
        validate_owner_id(owner_id)?;

        let rooms: Vec<Room> = self
            .list_all()
            .await?
            .into_iter()
            .filter(|room| room.resource_metadata.resource_owner == owner_id)
            .collect();

        if rooms.is_empty() {
            return Err(RoomError::NotFound {
                resource: "room".to_string(),
                id: format!("resource_owner={}", owner_id),
            });
        }

        Ok(rooms)
    }

    // ===== Room Commands =====

    /// Create a room together with its metadata and initial status reports
    ///
    /// Metadata is stored before the room row, so the row always references
    /// it. The returned room carries the persisted metadata and the status
    /// list that was passed in, each entry linked to the new room.
    pub async fn save(&self, room: Option<Room>) -> Result<Room, RoomError> {
        let mut room = room.ok_or_else(|| RoomError::invalid_input("room payload is required"))?;

        room.resource_metadata = self
            .metadata
            .save(&room.resource_metadata)
            .await
            .map_err(RoomError::internal)?;

        let mut persisted = self
            .room_repo
            .save(&room)
            .await
            .map_err(RoomError::internal)?;

        let mut statuses = Vec::with_capacity(room.current_status.len());
        for mut status in room.current_status {
            status.room_id = persisted.id;
            self.save_status(status.clone()).await?;
            statuses.push(status);
        }
        persisted.current_status = statuses;

        tracing::info!(
            room_id = ?persisted.id,
            room_number = %persisted.room_number,
            statuses = persisted.current_status.len(),
            "room created"
        );
        self.publish(RoomEvent::created(&persisted)).await;

        Ok(persisted)
    }

    /// Persist changes to an existing room
    ///
    /// The stored building is kept whatever the caller sends. A changed
    /// `resource_owner` is written through [`MetadataService`]; the stored
    /// lifecycle state is kept, so an update never reactivates a room.
    /// Status history comes from the store and changes only through the
    /// status operations.
    pub async fn update(&self, mut room: Room) -> Result<Room, RoomError> {
        let id = room
            .id
            .ok_or_else(|| RoomError::room_not_found("<unsaved>"))?;
        let existing = self.require_room(id).await?;

        if room.building != existing.building {
            tracing::debug!(
                room_id = id,
                requested = ?room.building,
                kept = ?existing.building,
                "ignoring building change on room update"
            );
        }
        room.building = existing.building;
        room.current_status = existing.current_status;

        let owner = room.resource_metadata.resource_owner;
        room.resource_metadata = if owner == existing.resource_metadata.resource_owner {
            existing.resource_metadata
        } else {
            validate_owner_id(owner)?;
            tracing::info!(room_id = id, resource_owner = owner, "room owner changed");
            self.metadata
                .reassign(existing.resource_metadata, owner)
                .await
                .map_err(RoomError::internal)?
        };

        let updated = self
            .room_repo
            .save(&room)
            .await
            .map_err(RoomError::internal)?;

        self.publish(RoomEvent::updated(&updated)).await;
        Ok(updated)
    }

    /// Soft delete: deactivate the room's metadata and return the updated room
    pub async fn delete(&self, id: i32) -> Result<Room, RoomError> {
        validate_room_id(id)?;

        let mut room = self.require_room(id).await?;
        room.resource_metadata = self
            .metadata
            .deactivate(room.resource_metadata)
            .await
            .map_err(RoomError::internal)?;

        let room = self.update(room).await?;

        tracing::info!(room_id = id, "room deactivated");
        self.publish(RoomEvent::deactivated(&room)).await;
        Ok(room)
    }

    // ===== Room Status Operations =====

    /// Status reports filed by `submitter_id`
    pub async fn find_all_status_by_submitter(
        &self,
        submitter_id: i32,
    ) -> Result<Vec<RoomStatus>, RoomError> {
        self.status_repo
            .find_all_by_submitter_id(submitter_id)
            .await
            .map_err(RoomError::internal)
    }

    /// Status reports whose submission timestamp equals `date` exactly
    pub async fn find_all_status_by_date(&self, date: &str) -> Result<Vec<RoomStatus>, RoomError> {
        self.status_repo
            .find_all_by_submitted_date_time(date)
            .await
            .map_err(RoomError::internal)
    }

    /// Direct lookup; absence is not an error
    pub async fn find_status_by_id(&self, id: i32) -> Result<Option<RoomStatus>, RoomError> {
        self.status_repo
            .find_by_id(id)
            .await
            .map_err(RoomError::internal)
    }

    /// List every status report in store order
    pub async fn list_all_status(&self) -> Result<Vec<RoomStatus>, RoomError> {
        self.status_repo.find_all().await.map_err(RoomError::internal)
    }

    pub async fn save_status(&self, status: RoomStatus) -> Result<(), RoomError> {
        self.update_status(status).await.map(|_| ())
    }

    pub async fn update_status(&self, status: RoomStatus) -> Result<RoomStatus, RoomError> {
        let saved = self
            .status_repo
            .save(&status)
            .await
            .map_err(RoomError::internal)?;

        tracing::debug!(status_id = ?saved.id, room_id = ?saved.room_id, "room status saved");
        self.publish(RoomEvent::status_recorded(&saved)).await;
        Ok(saved)
    }

    // ===== Helper Methods =====

    async fn require_room(&self, id: i32) -> Result<Room, RoomError> {
        self.room_repo
            .find_by_id(id)
            .await
            .map_err(RoomError::internal)?
            .ok_or_else(|| RoomError::room_not_found(id))
    }

    async fn publish(&self, event: RoomEvent) {
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!(error = %e, "failed to publish room event");
        }
    }
}
