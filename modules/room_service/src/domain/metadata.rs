//! Resource metadata lifecycle

use super::repository::ResourceMetadataRepository;
use crate::contract::{ResourceMetadata, ResourceState};
use anyhow::Result;
use std::sync::Arc;

/// Persists resource metadata and applies lifecycle transitions
pub struct MetadataService {
    repo: Arc<dyn ResourceMetadataRepository>,
}

impl MetadataService {
    pub fn new(repo: Arc<dyn ResourceMetadataRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, metadata: &ResourceMetadata) -> Result<ResourceMetadata> {
        self.repo.save(metadata).await
    }

    /// Mark the resource inactive and persist the change
    ///
    /// Deactivating already inactive metadata leaves it inactive.
    pub async fn deactivate(&self, metadata: ResourceMetadata) -> Result<ResourceMetadata> {
        let deactivated = ResourceMetadata {
            state: ResourceState::Inactive,
            updated_at: chrono::Utc::now(),
            ..metadata
        };
        self.repo.save(&deactivated).await
    }

    /// Move the resource to a new owner, keeping its lifecycle state
    pub async fn reassign(
        &self,
        metadata: ResourceMetadata,
        resource_owner: i32,
    ) -> Result<ResourceMetadata> {
        let reassigned = ResourceMetadata {
            resource_owner,
            updated_at: chrono::Utc::now(),
            ..metadata
        };
        self.repo.save(&reassigned).await
    }
}
