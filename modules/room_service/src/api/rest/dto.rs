//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Room DTOs =====

/// Room response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    /// Room identifier
    pub id: i32,

    /// Room number
    #[schema(example = "101")]
    pub room_number: String,

    /// Building the room belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<i32>,

    /// Room capacity
    #[schema(example = 4)]
    pub max_occupancy: i32,

    /// Ownership and lifecycle metadata
    pub resource_metadata: ResourceMetadataDto,

    /// Status reports for this room
    pub current_status: Vec<RoomStatusDto>,
}

/// Resource metadata DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceMetadataDto {
    /// Metadata identifier
    pub id: Option<i32>,

    /// Owning entity or user
    #[schema(example = 7)]
    pub resource_owner: i32,

    /// `false` once the room is soft-deleted
    pub active: bool,

    /// Lifecycle state
    #[schema(example = "ACTIVE")]
    pub state: String,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create room request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRoomRequest {
    /// Room number
    #[schema(example = "101")]
    pub room_number: String,

    /// Building the room belongs to
    #[serde(default)]
    pub building_id: Option<i32>,

    /// Room capacity
    pub max_occupancy: i32,

    /// Owner of the new room
    pub resource_metadata: NewResourceMetadataRequest,

    /// Initial status reports
    #[serde(default)]
    pub current_status: Vec<NewRoomStatusRequest>,
}

/// Metadata supplied with a new room
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewResourceMetadataRequest {
    /// Owning entity or user
    pub resource_owner: i32,
}

/// Update room request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRoomRequest {
    /// Room identifier; a request without one matches no room
    #[serde(default)]
    pub id: Option<i32>,

    /// Room number
    pub room_number: String,

    /// Accepted for compatibility; updates never move a room between buildings
    #[serde(default)]
    pub building_id: Option<i32>,

    /// Room capacity
    pub max_occupancy: i32,

    /// New owner; the stored owner is kept when absent
    #[serde(default)]
    pub resource_metadata: Option<NewResourceMetadataRequest>,
}

// ===== Room Status DTOs =====

/// Room status response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomStatusDto {
    /// Status identifier (absent for statuses not yet stored)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// Room the status belongs to
    pub room_id: Option<i32>,

    /// User who submitted the status
    #[schema(example = 7)]
    pub submitter_id: i32,

    /// Submission timestamp
    #[schema(example = "2024-01-01")]
    pub submitted_date_time: String,
}

/// Status report supplied with a new room
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewRoomStatusRequest {
    /// User who submitted the status
    pub submitter_id: i32,

    /// Submission timestamp
    pub submitted_date_time: String,
}

/// Create or update a status report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertRoomStatusRequest {
    /// Status identifier, present when updating
    #[serde(default)]
    pub id: Option<i32>,

    /// Room the status belongs to
    #[serde(default)]
    pub room_id: Option<i32>,

    /// User who submitted the status
    pub submitter_id: i32,

    /// Submission timestamp
    pub submitted_date_time: String,
}

// ===== List Response DTOs =====

/// List of rooms
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomsListResponse {
    /// List of rooms
    pub items: Vec<RoomDto>,

    /// Total count
    pub total: usize,
}

/// List of room statuses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomStatusListResponse {
    /// List of status reports
    pub items: Vec<RoomStatusDto>,

    /// Total count
    pub total: usize,
}

// Note: conversion implementations live in mapper.rs
