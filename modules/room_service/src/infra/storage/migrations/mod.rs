//! Database migrations for room service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_resource_metadata::Migration),
            Box::new(m20250301_000002_create_rooms::Migration),
            Box::new(m20250301_000003_create_room_status::Migration),
        ]
    }
}

mod m20250301_000001_create_resource_metadata {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_resource_metadata"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ResourceMetadata::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ResourceMetadata::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ResourceMetadata::ResourceOwner)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ResourceMetadata::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(ResourceMetadata::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(ResourceMetadata::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_resource_metadata_owner")
                        .table(ResourceMetadata::Table)
                        .col(ResourceMetadata::ResourceOwner)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ResourceMetadata::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ResourceMetadata {
        Table,
        Id,
        ResourceOwner,
        Active,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250301_000002_create_rooms {
    use super::m20250301_000001_create_resource_metadata::ResourceMetadata;
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_rooms"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Rooms::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Rooms::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Rooms::RoomNumber).string().not_null())
                        .col(ColumnDef::new(Rooms::BuildingId).integer())
                        .col(ColumnDef::new(Rooms::MaxOccupancy).integer().not_null())
                        .col(ColumnDef::new(Rooms::ResourceMetadataId).integer())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_rooms_resource_metadata")
                                .from(Rooms::Table, Rooms::ResourceMetadataId)
                                .to(ResourceMetadata::Table, ResourceMetadata::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_rooms_room_number")
                        .table(Rooms::Table)
                        .col(Rooms::RoomNumber)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_rooms_max_occupancy")
                        .table(Rooms::Table)
                        .col(Rooms::MaxOccupancy)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Rooms::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Rooms {
        Table,
        Id,
        RoomNumber,
        BuildingId,
        MaxOccupancy,
        ResourceMetadataId,
    }
}

mod m20250301_000003_create_room_status {
    use super::m20250301_000002_create_rooms::Rooms;
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_room_status"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(RoomStatus::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RoomStatus::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(RoomStatus::RoomId).integer())
                        .col(ColumnDef::new(RoomStatus::SubmitterId).integer().not_null())
                        .col(
                            ColumnDef::new(RoomStatus::SubmittedDateTime)
                                .string()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_room_status_room")
                                .from(RoomStatus::Table, RoomStatus::RoomId)
                                .to(Rooms::Table, Rooms::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_room_status_submitter_id")
                        .table(RoomStatus::Table)
                        .col(RoomStatus::SubmitterId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_room_status_submitted_date_time")
                        .table(RoomStatus::Table)
                        .col(RoomStatus::SubmittedDateTime)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_room_status_room_id")
                        .table(RoomStatus::Table)
                        .col(RoomStatus::RoomId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(RoomStatus::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum RoomStatus {
        Table,
        Id,
        RoomId,
        SubmitterId,
        SubmittedDateTime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_migration_names_are_unique() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let unique: HashSet<&String> = names.iter().collect();

        assert_eq!(names.len(), 3);
        assert_eq!(unique.len(), names.len(), "duplicate migration names: {:?}", names);
        assert!(names.iter().all(|name| name.starts_with("m2025")));
    }
}
