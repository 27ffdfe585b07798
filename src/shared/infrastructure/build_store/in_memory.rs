// In memory implementation of the BuildStore port.
//
// Responsibilities
// - Keep builds in a map keyed by id, behind one reader/writer lock.
// - Run every check-then-act sequence under a single write guard.

use crate::modules::builds::core::apply_patch::apply_patch;
use crate::modules::builds::core::build::{Build, BuildPatch};
use crate::shared::infrastructure::build_store::{BuildStore, BuildStoreError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBuildStore {
    builds: RwLock<HashMap<String, Build>>,
}

impl InMemoryBuildStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.builds.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl BuildStore for InMemoryBuildStore {
    async fn create(&self, build: Build) -> Result<(), BuildStoreError> {
        let mut guard = self.builds.write().await;
        match guard.entry(build.id.clone()) {
            Entry::Occupied(_) => Err(BuildStoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                tracing::debug!(id = %build.id, "build created");
                slot.insert(build);
                Ok(())
            }
        }
    }

    async fn read(&self, id: &str) -> Result<Build, BuildStoreError> {
        self.builds
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(BuildStoreError::NotFound)
    }

    async fn replace(&self, id: &str, build: Build) -> Result<(), BuildStoreError> {
        if build.id != id {
            return Err(BuildStoreError::InconsistentIds);
        }
        let previous = self.builds.write().await.insert(id.to_string(), build);
        tracing::debug!(id, replaced = previous.is_some(), "build stored");
        Ok(())
    }

    async fn partial_update(&self, id: &str, patch: BuildPatch) -> Result<(), BuildStoreError> {
        if !patch.targets(id) {
            return Err(BuildStoreError::InconsistentIds);
        }
        let mut guard = self.builds.write().await;
        let existing = guard.get_mut(id).ok_or(BuildStoreError::NotFound)?;
        *existing = apply_patch(std::mem::take(existing), &patch);
        tracing::debug!(id, "build patched");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), BuildStoreError> {
        self.builds
            .write()
            .await
            .remove(id)
            .ok_or(BuildStoreError::NotFound)?;
        tracing::debug!(id, "build deleted");
        Ok(())
    }
}
