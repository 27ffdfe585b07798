// Port for the keyed build collection.
//
// Boundaries
// - Errors are returned untranslated. Inbound adapters map them to transport semantics.
// - Cancellation is done by dropping the returned future.

use crate::modules::builds::core::build::{Build, BuildPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildStoreError {
    #[error("already exists")]
    AlreadyExists,

    #[error("not found")]
    NotFound,

    #[error("inconsistent IDs")]
    InconsistentIds,
}

#[async_trait]
pub trait BuildStore: Send + Sync {
    /// Stores `build` under its own id. Never overwrites.
    async fn create(&self, build: Build) -> Result<(), BuildStoreError>;

    async fn read(&self, id: &str) -> Result<Build, BuildStoreError>;

    /// Creates or overwrites the build stored under `id`.
    async fn replace(&self, id: &str, build: Build) -> Result<(), BuildStoreError>;

    /// Updates the specified fields of an existing build. Never creates.
    async fn partial_update(&self, id: &str, patch: BuildPatch) -> Result<(), BuildStoreError>;

    async fn delete(&self, id: &str) -> Result<(), BuildStoreError>;
}

pub mod in_memory;
