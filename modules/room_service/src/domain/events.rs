//! Domain events for room service
//!
//! Every lifecycle change of a room is published as a [`RoomEvent`]:
//! - `room_created`: room, metadata and initial statuses were saved
//! - `room_updated`: room row was rewritten
//! - `room_deactivated`: room metadata moved to `INACTIVE`
//! - `status_recorded`: a status report was written

use crate::contract::model::{Room, RoomStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RoomEvent {
    /// Room was created
    RoomCreated(RoomChangedEvent),
    /// Room was updated
    RoomUpdated(RoomChangedEvent),
    /// Room was soft-deleted
    RoomDeactivated(RoomChangedEvent),
    /// Status report was written
    StatusRecorded(StatusRecordedEvent),
}

/// Event data for room changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomChangedEvent {
    /// Room identifier
    pub room_id: Option<i32>,
    /// Room number
    pub room_number: String,
    /// Owner from the room metadata
    pub resource_owner: i32,
    /// Whether the room is active after the change
    pub active: bool,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for status reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecordedEvent {
    /// Status identifier
    pub status_id: Option<i32>,
    /// Room the status belongs to
    pub room_id: Option<i32>,
    /// User who submitted the status
    pub submitter_id: i32,
    /// Submission timestamp as provided by the submitter
    pub submitted_date_time: String,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a room event
    async fn publish(&self, event: RoomEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: RoomEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Publisher that writes every event to the `room_service::audit` tracing target
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: RoomEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(target: "room_service::audit", event = %payload, "room event");
        Ok(())
    }
}

impl RoomEvent {
    pub fn created(room: &Room) -> Self {
        RoomEvent::RoomCreated(RoomChangedEvent::from_room(room))
    }

    pub fn updated(room: &Room) -> Self {
        RoomEvent::RoomUpdated(RoomChangedEvent::from_room(room))
    }

    pub fn deactivated(room: &Room) -> Self {
        RoomEvent::RoomDeactivated(RoomChangedEvent::from_room(room))
    }

    pub fn status_recorded(status: &RoomStatus) -> Self {
        RoomEvent::StatusRecorded(StatusRecordedEvent {
            status_id: status.id,
            room_id: status.room_id,
            submitter_id: status.submitter_id,
            submitted_date_time: status.submitted_date_time.clone(),
            timestamp: Utc::now(),
        })
    }
}

impl RoomChangedEvent {
    fn from_room(room: &Room) -> Self {
        Self {
            room_id: room.id,
            room_number: room.room_number.clone(),
            resource_owner: room.resource_metadata.resource_owner,
            active: room.is_active(),
            timestamp: Utc::now(),
        }
    }
}
