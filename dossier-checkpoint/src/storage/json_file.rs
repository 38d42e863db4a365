//! JSON file checkpoint store: one `<checkpoint-id>.json` per snapshot
//! under a base directory. Writes go through a temp file and rename so a
//! crash mid-write never leaves a truncated checkpoint behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dossier_core::errors::CheckpointError;
use dossier_core::models::{CheckpointData, CheckpointStatus};
use dossier_core::traits::ICheckpointStore;
use tokio::fs;
use tracing::debug;

pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    pub async fn open(base_dir: impl AsRef<Path>) -> Result<Self, CheckpointError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await.map_err(io_error)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, checkpoint_id: &str) -> PathBuf {
        self.base_dir.join(format!("{checkpoint_id}.json"))
    }

    async fn read_all(&self) -> Result<Vec<CheckpointData>, CheckpointError> {
        let mut checkpoints = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await.map_err(io_error)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let bytes = fs::read(&path).await.map_err(io_error)?;
            checkpoints.push(serde_json::from_slice(&bytes)?);
        }
        Ok(checkpoints)
    }
}

#[async_trait]
impl ICheckpointStore for JsonFileStore {
    async fn save(&self, checkpoint: &CheckpointData) -> Result<(), CheckpointError> {
        let path = self.path_for(&checkpoint.checkpoint_id);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(checkpoint)?;
        fs::write(&tmp, &bytes).await.map_err(io_error)?;
        fs::rename(&tmp, &path).await.map_err(io_error)?;
        debug!(checkpoint_id = %checkpoint.checkpoint_id, path = %path.display(), "checkpoint written");
        Ok(())
    }

    async fn load(&self, checkpoint_id: &str) -> Result<Option<CheckpointData>, CheckpointError> {
        let path = self.path_for(checkpoint_id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(e)),
        }
    }

    async fn load_latest(
        &self,
        investigation_id: &str,
    ) -> Result<Option<CheckpointData>, CheckpointError> {
        let latest = self
            .read_all()
            .await?
            .into_iter()
            .filter(|c| {
                c.investigation_id == investigation_id && c.status != CheckpointStatus::Superseded
            })
            .max_by_key(|c| c.created_at);
        Ok(latest)
    }

    async fn list_checkpoints(
        &self,
        investigation_id: &str,
    ) -> Result<Vec<CheckpointData>, CheckpointError> {
        let mut checkpoints: Vec<CheckpointData> = self
            .read_all()
            .await?
            .into_iter()
            .filter(|c| c.investigation_id == investigation_id)
            .collect();
        checkpoints.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(checkpoints)
    }

    async fn delete(&self, checkpoint_id: &str) -> Result<(), CheckpointError> {
        match fs::remove_file(self.path_for(checkpoint_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e)),
        }
    }

    async fn mark_superseded(&self, checkpoint_id: &str) -> Result<(), CheckpointError> {
        let mut checkpoint =
            self.load(checkpoint_id)
                .await?
                .ok_or_else(|| CheckpointError::NotFound {
                    checkpoint_id: checkpoint_id.to_string(),
                })?;
        checkpoint.status = CheckpointStatus::Superseded;
        self.save(&checkpoint).await
    }
}

fn io_error(e: std::io::Error) -> CheckpointError {
    CheckpointError::StorageFailed {
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        let checkpoint = CheckpointData::new("inv-1", "periodic");
        store.save(&checkpoint).await.unwrap();

        let loaded = store.load(&checkpoint.checkpoint_id).await.unwrap().unwrap();
        assert_eq!(loaded.investigation_id, "inv-1");
        assert_eq!(loaded.reason, "periodic");
    }

    #[tokio::test]
    async fn missing_checkpoint_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        assert!(store.load("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        store.delete("nope").await.unwrap();
    }
}
