//! In-memory checkpoint store, for tests and single-process runs.

use async_trait::async_trait;
use dashmap::DashMap;
use dossier_core::errors::CheckpointError;
use dossier_core::models::{CheckpointData, CheckpointStatus};
use dossier_core::traits::ICheckpointStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    checkpoints: DashMap<String, CheckpointData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

#[async_trait]
impl ICheckpointStore for MemoryStore {
    async fn save(&self, checkpoint: &CheckpointData) -> Result<(), CheckpointError> {
        self.checkpoints
            .insert(checkpoint.checkpoint_id.clone(), checkpoint.clone());
        Ok(())
    }

    async fn load(&self, checkpoint_id: &str) -> Result<Option<CheckpointData>, CheckpointError> {
        Ok(self.checkpoints.get(checkpoint_id).map(|c| c.clone()))
    }

    async fn load_latest(
        &self,
        investigation_id: &str,
    ) -> Result<Option<CheckpointData>, CheckpointError> {
        let mut latest: Option<CheckpointData> = None;
        for entry in self.checkpoints.iter() {
            if entry.investigation_id != investigation_id
                || entry.status == CheckpointStatus::Superseded
            {
                continue;
            }
            if latest
                .as_ref()
                .map_or(true, |best| entry.created_at > best.created_at)
            {
                latest = Some(entry.clone());
            }
        }
        Ok(latest)
    }

    async fn list_checkpoints(
        &self,
        investigation_id: &str,
    ) -> Result<Vec<CheckpointData>, CheckpointError> {
        let mut checkpoints: Vec<CheckpointData> = self
            .checkpoints
            .iter()
            .filter(|entry| entry.investigation_id == investigation_id)
            .map(|entry| entry.clone())
            .collect();
        checkpoints.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(checkpoints)
    }

    async fn delete(&self, checkpoint_id: &str) -> Result<(), CheckpointError> {
        self.checkpoints.remove(checkpoint_id);
        Ok(())
    }

    async fn mark_superseded(&self, checkpoint_id: &str) -> Result<(), CheckpointError> {
        match self.checkpoints.get_mut(checkpoint_id) {
            Some(mut entry) => {
                entry.status = CheckpointStatus::Superseded;
                Ok(())
            }
            None => Err(CheckpointError::NotFound {
                checkpoint_id: checkpoint_id.to_string(),
            }),
        }
    }
}
