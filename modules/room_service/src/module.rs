//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::RoomsApi;
use crate::domain::{EventPublisher, MetadataService, NoOpEventPublisher, Service, TracingEventPublisher};
use crate::infra::storage::{
    Migrator, SeaOrmResourceMetadataRepository, SeaOrmRoomRepository,
    SeaOrmRoomStatusRepository,
};
use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Room service module
///
/// Lifecycle: [`init`](Self::init) once with a database connection, then
/// [`register_rest`](Self::register_rest) and [`client`](Self::client) hand
/// out the initialized service.
pub struct RoomServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for RoomServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl RoomServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Wire repositories and the domain service against `db`
    pub async fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let cfg = self.config.read().clone();

        if cfg.run_migrations {
            self.migrate(&db).await?;
        }

        // Build repositories
        let room_repo = Arc::new(SeaOrmRoomRepository::new(db.clone()));
        let status_repo = Arc::new(SeaOrmRoomStatusRepository::new(db.clone()));
        let metadata_repo = Arc::new(SeaOrmResourceMetadataRepository::new(db));

        let event_publisher: Arc<dyn EventPublisher> = if cfg.publish_events {
            Arc::new(TracingEventPublisher)
        } else {
            Arc::new(NoOpEventPublisher)
        };

        // Build domain service
        let service = Arc::new(Service::new(
            room_repo,
            status_repo,
            Arc::new(MetadataService::new(metadata_repo)),
            event_publisher,
        ));
        *self.service.write() = Some(service);

        tracing::info!(
            publish_events = cfg.publish_events,
            "Room service initialized"
        );
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Room service migrations completed");
        Ok(())
    }

    /// The initialized domain service
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow!("Service not initialized"))
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn RoomsApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        let prefix = self.config.read().route_prefix.clone();

        tracing::info!(prefix = %prefix, "Registering room service REST routes");
        crate::api::rest::routes::register_routes(router, &prefix, service)
    }
}
