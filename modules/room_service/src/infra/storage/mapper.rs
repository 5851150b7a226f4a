//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{BuildingRef, ResourceMetadata, ResourceState, Room, RoomStatus};
use anyhow::anyhow;
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Room Conversions =====

/// Assemble a room from its row, metadata row and status reports
pub fn room_from_parts(
    model: entity::Model,
    metadata: Option<entity::resource_metadata::Model>,
    current_status: Vec<RoomStatus>,
) -> anyhow::Result<Room> {
    let metadata = metadata.ok_or_else(|| anyhow!("room {} has no resource metadata", model.id))?;

    Ok(Room {
        id: Some(model.id),
        room_number: model.room_number,
        building: model.building_id.map(|id| BuildingRef { id }),
        max_occupancy: model.max_occupancy,
        resource_metadata: metadata.into(),
        current_status,
    })
}

impl From<&Room> for entity::ActiveModel {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.map_or(NotSet, Set),
            room_number: Set(room.room_number.clone()),
            building_id: Set(room.building.map(|b| b.id)),
            max_occupancy: Set(room.max_occupancy),
            resource_metadata_id: Set(room.resource_metadata.id),
        }
    }
}

// ===== Resource Metadata Conversions =====

impl From<entity::resource_metadata::Model> for ResourceMetadata {
    fn from(entity: entity::resource_metadata::Model) -> Self {
        Self {
            id: Some(entity.id),
            resource_owner: entity.resource_owner,
            state: ResourceState::from(entity.active),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&ResourceMetadata> for entity::resource_metadata::ActiveModel {
    fn from(metadata: &ResourceMetadata) -> Self {
        Self {
            id: metadata.id.map_or(NotSet, Set),
            resource_owner: Set(metadata.resource_owner),
            active: Set(metadata.is_active()),
            created_at: Set(metadata.created_at),
            updated_at: Set(metadata.updated_at),
        }
    }
}

// ===== Room Status Conversions =====

impl From<entity::room_status::Model> for RoomStatus {
    fn from(entity: entity::room_status::Model) -> Self {
        Self {
            id: Some(entity.id),
            room_id: entity.room_id,
            submitter_id: entity.submitter_id,
            submitted_date_time: entity.submitted_date_time,
        }
    }
}

impl From<&RoomStatus> for entity::room_status::ActiveModel {
    fn from(status: &RoomStatus) -> Self {
        Self {
            id: status.id.map_or(NotSet, Set),
            room_id: Set(status.room_id),
            submitter_id: Set(status.submitter_id),
            submitted_date_time: Set(status.submitted_date_time.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn metadata_row(active: bool) -> entity::resource_metadata::Model {
        entity::resource_metadata::Model {
            id: 9,
            resource_owner: 7,
            active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_room_from_parts() {
        let row = entity::Model {
            id: 1,
            room_number: "101".to_string(),
            building_id: Some(3),
            max_occupancy: 4,
            resource_metadata_id: Some(9),
        };

        let room = room_from_parts(row, Some(metadata_row(false)), vec![]).unwrap();

        assert_eq!(room.id, Some(1));
        assert_eq!(room.building, Some(BuildingRef { id: 3 }));
        assert_eq!(room.resource_metadata.id, Some(9));
        assert_eq!(room.resource_metadata.state, ResourceState::Inactive);
    }

    #[test]
    fn test_room_without_metadata_is_rejected() {
        let row = entity::Model {
            id: 2,
            room_number: "102".to_string(),
            building_id: None,
            max_occupancy: 2,
            resource_metadata_id: None,
        };

        let err = room_from_parts(row, None, vec![]).unwrap_err();
        assert!(err.to_string().contains("room 2"));
    }

    #[test]
    fn test_unsaved_room_leaves_id_unset() {
        let room = Room::new("101", 4, 7).with_building(5);
        let active: entity::ActiveModel = (&room).into();

        assert!(matches!(active.id, NotSet));
        assert!(matches!(active.building_id, Set(Some(5))));
        assert!(matches!(active.resource_metadata_id, Set(None)));
    }
}
