//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Rooms table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Room identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Room number as entered
    pub room_number: String,

    /// Building owning this room
    pub building_id: Option<i32>,

    /// Room capacity
    pub max_occupancy: i32,

    /// Link to the owned metadata row, written once the metadata is stored
    pub resource_metadata_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to resource_metadata
    #[sea_orm(
        belongs_to = "resource_metadata::Entity",
        from = "Column::ResourceMetadataId",
        to = "resource_metadata::Column::Id"
    )]
    ResourceMetadata,
    /// One-to-many relationship with status reports
    #[sea_orm(has_many = "room_status::Entity")]
    RoomStatus,
}

impl Related<resource_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceMetadata.def()
    }
}

impl Related<room_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Resource metadata module
pub mod resource_metadata {
    use sea_orm::entity::prelude::*;

    /// Resource metadata table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "resource_metadata")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Owning entity or user
        pub resource_owner: i32,

        /// `false` once the resource is soft-deleted
        pub active: bool,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Room status module
pub mod room_status {
    use sea_orm::entity::prelude::*;

    /// Room status table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "room_status")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Room the report belongs to
        pub room_id: Option<i32>,

        pub submitter_id: i32,

        /// Opaque submission timestamp
        pub submitted_date_time: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to rooms
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::RoomId",
            to = "super::Column::Id"
        )]
        Room,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Room.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
