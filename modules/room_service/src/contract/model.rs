//! Contract models for room service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// A physical campus room tracked as a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Store-assigned identifier, `None` until the room is first saved
    pub id: Option<i32>,
    /// Room number, expected to hold a positive integer
    pub room_number: String,
    /// Building the room belongs to (owned by the building subsystem)
    pub building: Option<BuildingRef>,
    /// Capacity of the room
    pub max_occupancy: i32,
    /// Ownership and lifecycle metadata
    pub resource_metadata: ResourceMetadata,
    /// Status reports attached to this room
    pub current_status: Vec<RoomStatus>,
}

impl Room {
    /// Create an unsaved room with fresh active metadata
    pub fn new(room_number: impl Into<String>, max_occupancy: i32, resource_owner: i32) -> Self {
        Self {
            id: None,
            room_number: room_number.into(),
            building: None,
            max_occupancy,
            resource_metadata: ResourceMetadata::new(resource_owner),
            current_status: Vec::new(),
        }
    }

    /// Attach the room to a building
    pub fn with_building(mut self, building_id: i32) -> Self {
        self.building = Some(BuildingRef { id: building_id });
        self
    }

    /// Add an initial status report
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.current_status.push(status);
        self
    }

    /// Whether the room has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.resource_metadata.is_active()
    }
}

/// Reference to a building managed by the building subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildingRef {
    pub id: i32,
}

/// Ownership and lifecycle flag shared by all resource kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    /// Store-assigned identifier
    pub id: Option<i32>,
    /// Identifier of the owning entity or user
    pub resource_owner: i32,
    /// Lifecycle state
    pub state: ResourceState,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl ResourceMetadata {
    /// Fresh, active metadata for the given owner
    pub fn new(resource_owner: i32) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            resource_owner,
            state: ResourceState::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == ResourceState::Active
    }
}

/// Resource lifecycle state
///
/// The only transition is `Active -> Inactive`, performed by a soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceState {
    #[default]
    Active,
    Inactive,
}

impl ResourceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl From<bool> for ResourceState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

/// A submitter-attributed status report about a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatus {
    /// Store-assigned identifier
    pub id: Option<i32>,
    /// Owning room, set by the service when the room is saved
    pub room_id: Option<i32>,
    /// User who submitted the status
    pub submitter_id: i32,
    /// Submission timestamp; opaque string compared by exact match
    pub submitted_date_time: String,
}

impl RoomStatus {
    /// Create an unsaved status report
    pub fn new(submitter_id: i32, submitted_date_time: impl Into<String>) -> Self {
        Self {
            id: None,
            room_id: None,
            submitter_id,
            submitted_date_time: submitted_date_time.into(),
        }
    }
}
