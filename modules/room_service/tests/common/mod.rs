//! Common test utilities: in-memory store and service builders
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use room_service::contract::{ResourceMetadata, Room, RoomStatus};
use room_service::domain::repository::{
    ResourceMetadataRepository, RoomRepository, RoomStatusRepository,
};
use room_service::domain::{EventPublisher, MetadataService, RoomEvent, Service};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Room row as a relational store would keep it
#[derive(Debug, Clone)]
struct StoredRoom {
    room: Room,
    metadata_id: Option<i32>,
}

#[derive(Default)]
struct StoreState {
    rooms: BTreeMap<i32, StoredRoom>,
    metadata: HashMap<i32, ResourceMetadata>,
    statuses: BTreeMap<i32, RoomStatus>,
    next_id: i32,
}

impl StoreState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    /// Join metadata and status reports the way the SQL repository does
    fn hydrate(&self, id: i32, stored: &StoredRoom) -> anyhow::Result<Room> {
        let metadata = stored
            .metadata_id
            .and_then(|mid| self.metadata.get(&mid).cloned())
            .ok_or_else(|| anyhow::anyhow!("room {} has no resource metadata", id))?;

        let current_status = self
            .statuses
            .values()
            .filter(|s| s.room_id == Some(id))
            .cloned()
            .collect();

        Ok(Room {
            id: Some(id),
            resource_metadata: metadata,
            current_status,
            ..stored.room.clone()
        })
    }
}

/// Shared in-memory backing for the three repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_count(&self) -> usize {
        self.state.read().rooms.len()
    }

    pub fn status_count(&self) -> usize {
        self.state.read().statuses.len()
    }

    pub fn metadata_count(&self) -> usize {
        self.state.read().metadata.len()
    }

    /// Print verbose information about store state
    pub fn print_state(&self, context: &str) {
        let state = self.state.read();
        println!("\n========== Store State: {} ==========", context);
        for (id, stored) in &state.rooms {
            println!(
                "  room {} #{} occupancy={} building={:?} metadata={:?}",
                id,
                stored.room.room_number,
                stored.room.max_occupancy,
                stored.room.building,
                stored.metadata_id
            );
        }
        for (id, status) in &state.statuses {
            println!(
                "  status {} room={:?} submitter={} at={}",
                id, status.room_id, status.submitter_id, status.submitted_date_time
            );
        }
        println!("==========================================\n");
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn find_all(&self) -> anyhow::Result<Vec<Room>> {
        let state = self.state.read();
        state
            .rooms
            .iter()
            .map(|(id, stored)| state.hydrate(*id, stored))
            .collect()
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Room>> {
        let state = self.state.read();
        state
            .rooms
            .get(&id)
            .map(|stored| state.hydrate(id, stored))
            .transpose()
    }

    async fn find_by_room_number(&self, room_number: &str) -> anyhow::Result<Option<Room>> {
        let state = self.state.read();
        state
            .rooms
            .iter()
            .find(|(_, stored)| stored.room.room_number == room_number)
            .map(|(id, stored)| state.hydrate(*id, stored))
            .transpose()
    }

    async fn find_by_max_occupancy(&self, occupancy: i32) -> anyhow::Result<Vec<Room>> {
        let state = self.state.read();
        state
            .rooms
            .iter()
            .filter(|(_, stored)| stored.room.max_occupancy == occupancy)
            .map(|(id, stored)| state.hydrate(*id, stored))
            .collect()
    }

    async fn save(&self, room: &Room) -> anyhow::Result<Room> {
        let mut state = self.state.write();
        let id = match room.id {
            Some(id) => id,
            None => state.next_id(),
        };
        state.rooms.insert(
            id,
            StoredRoom {
                room: Room {
                    id: Some(id),
                    current_status: Vec::new(),
                    ..room.clone()
                },
                metadata_id: room.resource_metadata.id,
            },
        );
        Ok(Room {
            id: Some(id),
            ..room.clone()
        })
    }
}

/// Status repository view over the shared store
#[derive(Clone)]
pub struct InMemoryStatusRepo(pub InMemoryStore);

#[async_trait]
impl RoomStatusRepository for InMemoryStatusRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<RoomStatus>> {
        Ok(self.0.state.read().statuses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<RoomStatus>> {
        Ok(self.0.state.read().statuses.get(&id).cloned())
    }

    async fn find_all_by_submitter_id(&self, submitter_id: i32) -> anyhow::Result<Vec<RoomStatus>> {
        Ok(self
            .0
            .state
            .read()
            .statuses
            .values()
            .filter(|s| s.submitter_id == submitter_id)
            .cloned()
            .collect())
    }

    async fn find_all_by_submitted_date_time(&self, date: &str) -> anyhow::Result<Vec<RoomStatus>> {
        Ok(self
            .0
            .state
            .read()
            .statuses
            .values()
            .filter(|s| s.submitted_date_time == date)
            .cloned()
            .collect())
    }

    async fn save(&self, status: &RoomStatus) -> anyhow::Result<RoomStatus> {
        let mut state = self.0.state.write();
        let id = match status.id {
            Some(id) => id,
            None => state.next_id(),
        };
        let saved = RoomStatus {
            id: Some(id),
            ..status.clone()
        };
        state.statuses.insert(id, saved.clone());
        Ok(saved)
    }
}

/// Metadata repository view over the shared store
#[derive(Clone)]
pub struct InMemoryMetadataRepo(pub InMemoryStore);

#[async_trait]
impl ResourceMetadataRepository for InMemoryMetadataRepo {
    async fn save(&self, metadata: &ResourceMetadata) -> anyhow::Result<ResourceMetadata> {
        let mut state = self.0.state.write();
        let id = match metadata.id {
            Some(id) => id,
            None => state.next_id(),
        };
        let saved = ResourceMetadata {
            id: Some(id),
            ..metadata.clone()
        };
        state.metadata.insert(id, saved.clone());
        Ok(saved)
    }
}

/// Room repository whose every call fails, to exercise error mapping
pub struct FailingRoomRepo;

#[async_trait]
impl RoomRepository for FailingRoomRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Room>> {
        anyhow::bail!("database is unavailable")
    }

    async fn find_by_id(&self, _id: i32) -> anyhow::Result<Option<Room>> {
        anyhow::bail!("database is unavailable")
    }

    async fn find_by_room_number(&self, _room_number: &str) -> anyhow::Result<Option<Room>> {
        anyhow::bail!("database is unavailable")
    }

    async fn find_by_max_occupancy(&self, _occupancy: i32) -> anyhow::Result<Vec<Room>> {
        anyhow::bail!("database is unavailable")
    }

    async fn save(&self, _room: &Room) -> anyhow::Result<Room> {
        anyhow::bail!("database is unavailable")
    }
}

/// Metadata repository whose writes always fail
pub struct FailingMetadataRepo;

#[async_trait]
impl ResourceMetadataRepository for FailingMetadataRepo {
    async fn save(&self, _metadata: &ResourceMetadata) -> anyhow::Result<ResourceMetadata> {
        anyhow::bail!("metadata table is locked")
    }
}

/// Publisher that keeps every event for assertions
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<RoomEvent>>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<RoomEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: RoomEvent) -> anyhow::Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Service over a fresh in-memory store
pub fn create_test_service() -> (Service, InMemoryStore, RecordingPublisher) {
    let store = InMemoryStore::new();
    let publisher = RecordingPublisher::default();
    let service = Service::new(
        Arc::new(store.clone()),
        Arc::new(InMemoryStatusRepo(store.clone())),
        Arc::new(MetadataService::new(Arc::new(InMemoryMetadataRepo(
            store.clone(),
        )))),
        Arc::new(publisher.clone()),
    );
    (service, store, publisher)
}

/// Service whose room repository always fails
pub fn create_failing_service() -> Service {
    let store = InMemoryStore::new();
    Service::new(
        Arc::new(FailingRoomRepo),
        Arc::new(InMemoryStatusRepo(store.clone())),
        Arc::new(MetadataService::new(Arc::new(InMemoryMetadataRepo(store)))),
        Arc::new(RecordingPublisher::default()),
    )
}

/// Service over a healthy store whose metadata writes fail
pub fn create_service_with_failing_metadata() -> (Service, InMemoryStore) {
    let store = InMemoryStore::new();
    let service = Service::new(
        Arc::new(store.clone()),
        Arc::new(InMemoryStatusRepo(store.clone())),
        Arc::new(MetadataService::new(Arc::new(FailingMetadataRepo))),
        Arc::new(RecordingPublisher::default()),
    );
    (service, store)
}

/// Room "101" in building 1, capacity 4, owner 7, one status from 2024-01-01
pub fn sample_room() -> Room {
    Room::new("101", 4, 7)
        .with_building(1)
        .with_status(RoomStatus::new(7, "2024-01-01"))
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}
