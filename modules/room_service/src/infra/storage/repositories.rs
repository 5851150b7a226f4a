//! SeaORM repository implementations

use crate::contract::{ResourceMetadata, Room, RoomStatus};
use crate::domain::repository::{
    ResourceMetadataRepository, RoomRepository, RoomStatusRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::entity;
use super::mapper::room_from_parts;

// ===== Room Repository =====

/// Room ids bound per status query; stays well below driver parameter limits
pub const STATUS_LOOKUP_BATCH: usize = 500;

pub struct SeaOrmRoomRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRoomRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Run a room query and hydrate metadata and status reports
    async fn load(&self, query: Select<entity::Entity>) -> Result<Vec<Room>> {
        let rows = query
            .find_also_related(entity::resource_metadata::Entity)
            .all(&*self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: Vec<i32> = rows.iter().map(|(room, _)| room.id).collect();
        let mut statuses: HashMap<i32, Vec<RoomStatus>> = HashMap::new();
        for chunk in room_ids.chunks(STATUS_LOOKUP_BATCH) {
            for status in entity::room_status::Entity::find()
                .filter(entity::room_status::Column::RoomId.is_in(chunk.iter().copied()))
                .order_by_asc(entity::room_status::Column::Id)
                .all(&*self.db)
                .await?
            {
                if let Some(room_id) = status.room_id {
                    statuses.entry(room_id).or_default().push(status.into());
                }
            }
        }

        rows.into_iter()
            .map(|(room, metadata)| {
                let current_status = statuses.remove(&room.id).unwrap_or_default();
                room_from_parts(room, metadata, current_status)
            })
            .collect()
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_all(&self) -> Result<Vec<Room>> {
        self.load(entity::Entity::find()).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Room>> {
        let rooms = self.load(entity::Entity::find_by_id(id)).await?;
        Ok(rooms.into_iter().next())
    }

    async fn find_by_room_number(&self, room_number: &str) -> Result<Option<Room>> {
        let rooms = self
            .load(
                entity::Entity::find()
                    .filter(entity::Column::RoomNumber.eq(room_number))
                    .order_by_asc(entity::Column::Id),
            )
            .await?;
        Ok(rooms.into_iter().next())
    }

    async fn find_by_max_occupancy(&self, occupancy: i32) -> Result<Vec<Room>> {
        self.load(entity::Entity::find().filter(entity::Column::MaxOccupancy.eq(occupancy)))
            .await
    }

    async fn save(&self, room: &Room) -> Result<Room> {
        let active: entity::ActiveModel = room.into();

        let existing = match room.id {
            Some(id) => entity::Entity::find_by_id(id).one(&*self.db).await?,
            None => None,
        };

        let saved = if existing.is_some() {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        Ok(Room {
            id: Some(saved.id),
            ..room.clone()
        })
    }
}

// ===== Room Status Repository =====

pub struct SeaOrmRoomStatusRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRoomStatusRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomStatusRepository for SeaOrmRoomStatusRepository {
    async fn find_all(&self) -> Result<Vec<RoomStatus>> {
        let results = entity::room_status::Entity::find()
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<RoomStatus>> {
        let result = entity::room_status::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_all_by_submitter_id(&self, submitter_id: i32) -> Result<Vec<RoomStatus>> {
        let results = entity::room_status::Entity::find()
            .filter(entity::room_status::Column::SubmitterId.eq(submitter_id))
            .order_by_asc(entity::room_status::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_all_by_submitted_date_time(&self, date: &str) -> Result<Vec<RoomStatus>> {
        let results = entity::room_status::Entity::find()
            .filter(entity::room_status::Column::SubmittedDateTime.eq(date))
            .order_by_asc(entity::room_status::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn save(&self, status: &RoomStatus) -> Result<RoomStatus> {
        let active: entity::room_status::ActiveModel = status.into();

        let existing = match status.id {
            Some(id) => {
                entity::room_status::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await?
            }
            None => None,
        };

        let saved = if existing.is_some() {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        Ok(saved.into())
    }
}

// ===== Resource Metadata Repository =====

pub struct SeaOrmResourceMetadataRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmResourceMetadataRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceMetadataRepository for SeaOrmResourceMetadataRepository {
    async fn save(&self, metadata: &ResourceMetadata) -> Result<ResourceMetadata> {
        let active: entity::resource_metadata::ActiveModel = metadata.into();

        let existing = match metadata.id {
            Some(id) => {
                entity::resource_metadata::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await?
            }
            None => None,
        };

        let saved = if existing.is_some() {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        Ok(saved.into())
    }
}
