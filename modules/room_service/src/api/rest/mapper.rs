//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract::{self, BuildingRef};

// ===== Room conversions =====

impl From<contract::Room> for RoomDto {
    fn from(room: contract::Room) -> Self {
        Self {
            id: room.id.unwrap_or_default(),
            room_number: room.room_number,
            building_id: room.building.map(|b| b.id),
            max_occupancy: room.max_occupancy,
            resource_metadata: room.resource_metadata.into(),
            current_status: room.current_status.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateRoomRequest> for contract::Room {
    fn from(req: CreateRoomRequest) -> Self {
        Self {
            id: None,
            room_number: req.room_number,
            building: req.building_id.map(|id| BuildingRef { id }),
            max_occupancy: req.max_occupancy,
            resource_metadata: contract::ResourceMetadata::new(
                req.resource_metadata.resource_owner,
            ),
            current_status: req
                .current_status
                .into_iter()
                .map(|s| contract::RoomStatus::new(s.submitter_id, s.submitted_date_time))
                .collect(),
        }
    }
}

impl UpdateRoomRequest {
    /// Apply the requested changes to the currently stored room
    pub fn apply_to(self, mut room: contract::Room) -> contract::Room {
        room.room_number = self.room_number;
        room.building = self.building_id.map(|id| BuildingRef { id });
        room.max_occupancy = self.max_occupancy;
        if let Some(metadata) = self.resource_metadata {
            room.resource_metadata.resource_owner = metadata.resource_owner;
        }
        room
    }
}

// ===== Resource Metadata conversions =====

impl From<contract::ResourceMetadata> for ResourceMetadataDto {
    fn from(metadata: contract::ResourceMetadata) -> Self {
        Self {
            id: metadata.id,
            resource_owner: metadata.resource_owner,
            active: metadata.is_active(),
            state: metadata.state.as_str().to_string(),
            created_at: metadata.created_at,
            updated_at: metadata.updated_at,
        }
    }
}

// ===== Room Status conversions =====

impl From<contract::RoomStatus> for RoomStatusDto {
    fn from(status: contract::RoomStatus) -> Self {
        Self {
            id: status.id,
            room_id: status.room_id,
            submitter_id: status.submitter_id,
            submitted_date_time: status.submitted_date_time,
        }
    }
}

impl From<UpsertRoomStatusRequest> for contract::RoomStatus {
    fn from(req: UpsertRoomStatusRequest) -> Self {
        Self {
            id: req.id,
            room_id: req.room_id,
            submitter_id: req.submitter_id,
            submitted_date_time: req.submitted_date_time,
        }
    }
}

// ===== List conversions =====

impl From<Vec<contract::Room>> for RoomsListResponse {
    fn from(rooms: Vec<contract::Room>) -> Self {
        let items: Vec<RoomDto> = rooms.into_iter().map(Into::into).collect();
        let total = items.len();
        Self { items, total }
    }
}

impl From<Vec<contract::RoomStatus>> for RoomStatusListResponse {
    fn from(statuses: Vec<contract::RoomStatus>) -> Self {
        let items: Vec<RoomStatusDto> = statuses.into_iter().map(Into::into).collect();
        let total = items.len();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_builds_active_room() {
        let req: CreateRoomRequest = serde_json::from_value(serde_json::json!({
            "room_number": "101",
            "building_id": 1,
            "max_occupancy": 4,
            "resource_metadata": { "resource_owner": 7 },
            "current_status": [
                { "submitter_id": 7, "submitted_date_time": "2024-01-01" }
            ]
        }))
        .unwrap();

        let room: contract::Room = req.into();

        assert_eq!(room.id, None);
        assert_eq!(room.building, Some(BuildingRef { id: 1 }));
        assert!(room.is_active());
        assert_eq!(room.resource_metadata.resource_owner, 7);
        assert_eq!(room.current_status.len(), 1);
        assert_eq!(room.current_status[0].room_id, None);
    }

    #[test]
    fn test_metadata_dto_exposes_state() {
        let mut metadata = contract::ResourceMetadata::new(3);
        metadata.state = contract::ResourceState::Inactive;

        let dto: ResourceMetadataDto = metadata.into();

        assert!(!dto.active);
        assert_eq!(dto.state, "INACTIVE");
    }

    #[test]
    fn test_update_request_applies_to_stored_room() {
        let mut stored = contract::Room::new("101", 4, 7).with_building(1);
        stored.id = Some(5);

        let req: UpdateRoomRequest = serde_json::from_value(serde_json::json!({
            "id": 5,
            "room_number": "102",
            "max_occupancy": 8
        }))
        .unwrap();
        let room = req.apply_to(stored.clone());

        assert_eq!(room.id, Some(5));
        assert_eq!(room.room_number, "102");
        assert_eq!(room.max_occupancy, 8);
        assert_eq!(room.building, None);
        assert_eq!(room.resource_metadata.resource_owner, 7);

        let req: UpdateRoomRequest = serde_json::from_value(serde_json::json!({
            "id": 5,
            "room_number": "101",
            "max_occupancy": 4,
            "resource_metadata": { "resource_owner": 9 }
        }))
        .unwrap();

        assert_eq!(req.apply_to(stored).resource_metadata.resource_owner, 9);
    }
}
