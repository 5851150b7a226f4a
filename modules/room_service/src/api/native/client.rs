//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Room, RoomError, RoomStatus, RoomsApi};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RoomsApi for NativeClient {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        self.service.list_all().await
    }

    async fn get_room(&self, id: i32) -> Result<Room, RoomError> {
        self.service.find_by_id(id).await
    }

    async fn get_room_by_number(&self, room_number: &str) -> Result<Room, RoomError> {
        self.service.find_by_room_number(room_number).await
    }

    async fn find_rooms_by_max_occupancy(&self, occupancy: i32) -> Result<Vec<Room>, RoomError> {
        self.service.find_by_max_occupancy(occupancy).await
    }

    async fn find_rooms_by_owner(&self, owner_id: i32) -> Result<Vec<Room>, RoomError> {
        self.service.find_by_resource_owner(owner_id).await
    }

    async fn create_room(&self, room: Room) -> Result<Room, RoomError> {
        self.service.save(Some(room)).await
    }

    async fn update_room(&self, room: Room) -> Result<Room, RoomError> {
        self.service.update(room).await
    }

    async fn deactivate_room(&self, id: i32) -> Result<Room, RoomError> {
        self.service.delete(id).await
    }

    async fn list_statuses(&self) -> Result<Vec<RoomStatus>, RoomError> {
        self.service.list_all_status().await
    }

    async fn get_status(&self, id: i32) -> Result<Option<RoomStatus>, RoomError> {
        self.service.find_status_by_id(id).await
    }

    async fn find_statuses_by_submitter(
        &self,
        submitter_id: i32,
    ) -> Result<Vec<RoomStatus>, RoomError> {
        self.service.find_all_status_by_submitter(submitter_id).await
    }

    async fn find_statuses_by_date(&self, date: &str) -> Result<Vec<RoomStatus>, RoomError> {
        self.service.find_all_status_by_date(date).await
    }

    async fn record_status(&self, status: RoomStatus) -> Result<RoomStatus, RoomError> {
        self.service.update_status(status).await
    }
}
