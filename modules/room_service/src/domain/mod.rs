//! Domain layer - business logic and services

pub mod events;
pub mod metadata;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, NoOpEventPublisher, RoomEvent, TracingEventPublisher};
pub use metadata::MetadataService;
pub use repository::{ResourceMetadataRepository, RoomRepository, RoomStatusRepository};
pub use service::Service;
