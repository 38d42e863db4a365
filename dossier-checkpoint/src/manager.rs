//! Checkpoint lifecycle management on top of a pluggable store.
//!
//! The manager, not the store, owns the invariants: one ACTIVE
//! checkpoint per investigation, content hashes computed on save and
//! verified on load, review-required and ACTIVE snapshots exempt from
//! retention cleanup. The supersede-then-save sequence is serialized
//! under an async mutex so concurrent saves cannot race two ACTIVEs in.

use std::sync::Arc;

use chrono::Utc;
use dossier_core::models::{CheckpointData, CheckpointStatus, ResumeStrategy};
use dossier_core::traits::ICheckpointStore;
use dossier_core::config::CheckpointConfig;
use dossier_core::errors::CheckpointError;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::resume::ResumptionPlan;

pub struct CheckpointManager {
    store: Arc<dyn ICheckpointStore>,
    config: CheckpointConfig,
    save_lock: Mutex<()>,
}

impl CheckpointManager {
    pub fn new(store: Arc<dyn ICheckpointStore>, config: CheckpointConfig) -> Self {
        Self {
            store,
            config,
            save_lock: Mutex::new(()),
        }
    }

    /// Persist a new ACTIVE checkpoint, superseding the previous ACTIVE
    /// one for the same investigation.
    pub async fn create_checkpoint(
        &self,
        mut checkpoint: CheckpointData,
    ) -> Result<CheckpointData, CheckpointError> {
        let _guard = self.save_lock.lock().await;

        for existing in self
            .store
            .list_checkpoints(&checkpoint.investigation_id)
            .await?
        {
            if existing.status == CheckpointStatus::Active
                && existing.checkpoint_id != checkpoint.checkpoint_id
            {
                self.store.mark_superseded(&existing.checkpoint_id).await?;
            }
        }

        checkpoint.status = CheckpointStatus::Active;
        checkpoint.updated_at = Utc::now();
        checkpoint.content_hash = Some(
            checkpoint
                .compute_content_hash()
                .map_err(|e| CheckpointError::StorageFailed {
                    reason: e.to_string(),
                })?,
        );
        self.store.save(&checkpoint).await?;
        info!(
            checkpoint_id = %checkpoint.checkpoint_id,
            investigation_id = %checkpoint.investigation_id,
            reason = %checkpoint.reason,
            "checkpoint saved"
        );

        if self.config.auto_cleanup {
            self.cleanup(&checkpoint.investigation_id).await?;
        }
        Ok(checkpoint)
    }

    /// Load a checkpoint and verify its content hash.
    pub async fn load_verified(
        &self,
        checkpoint_id: &str,
    ) -> Result<CheckpointData, CheckpointError> {
        let checkpoint =
            self.store
                .load(checkpoint_id)
                .await?
                .ok_or_else(|| CheckpointError::NotFound {
                    checkpoint_id: checkpoint_id.to_string(),
                })?;
        self.verify(&checkpoint)?;
        Ok(checkpoint)
    }

    fn verify(&self, checkpoint: &CheckpointData) -> Result<(), CheckpointError> {
        let Some(stored) = checkpoint.content_hash.as_deref() else {
            // Pre-hash snapshots load unverified.
            return Ok(());
        };
        let computed =
            checkpoint
                .compute_content_hash()
                .map_err(|e| CheckpointError::StorageFailed {
                    reason: e.to_string(),
                })?;
        if stored != computed {
            warn!(
                checkpoint_id = %checkpoint.checkpoint_id,
                "checkpoint content hash mismatch"
            );
            return Err(CheckpointError::IntegrityMismatch {
                checkpoint_id: checkpoint.checkpoint_id.to_string(),
            });
        }
        Ok(())
    }

    /// Build a resumption plan from an explicit checkpoint, or from the
    /// investigation's latest non-superseded one. The source checkpoint
    /// is marked RESTORED.
    pub async fn resume(
        &self,
        investigation_id: &str,
        checkpoint_id: Option<&str>,
        strategy: ResumeStrategy,
    ) -> Result<ResumptionPlan, CheckpointError> {
        let mut checkpoint = match checkpoint_id {
            Some(id) => self.load_verified(id).await?,
            None => {
                let latest = self.store.load_latest(investigation_id).await?.ok_or_else(
                    || CheckpointError::NoneForInvestigation {
                        investigation_id: investigation_id.to_string(),
                    },
                )?;
                self.verify(&latest)?;
                latest
            }
        };

        let plan = ResumptionPlan::build(&checkpoint, strategy);
        checkpoint.status = CheckpointStatus::Restored;
        checkpoint.updated_at = Utc::now();
        self.store.save(&checkpoint).await?;
        info!(
            checkpoint_id = %checkpoint.checkpoint_id,
            investigation_id,
            strategy = ?strategy,
            resume_phase = %plan.resume_phase,
            dropped = plan.dropped_types.len(),
            "resumption plan built"
        );
        Ok(plan)
    }

    /// Fork a checkpoint into a new investigation for what-if
    /// exploration. The branch lives on its own lineage under
    /// `branch_investigation_id`, so the source investigation keeps its
    /// ACTIVE checkpoint untouched; the branch records the source as
    /// parent.
    pub async fn create_branch(
        &self,
        source_checkpoint_id: &str,
        branch_investigation_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Result<CheckpointData, CheckpointError> {
        let source = self.load_verified(source_checkpoint_id).await?;
        let branch_investigation_id = branch_investigation_id.into();
        if branch_investigation_id == source.investigation_id {
            return Err(CheckpointError::BranchNeedsNewInvestigation {
                investigation_id: branch_investigation_id,
            });
        }
        let mut branch = source.clone();
        branch.checkpoint_id = uuid::Uuid::new_v4().to_string();
        branch.investigation_id = branch_investigation_id;
        branch.parent_checkpoint_id = Some(source.checkpoint_id.clone());
        branch.reason = reason.into();
        branch.status = CheckpointStatus::Active;
        branch.requires_review = false;
        branch.review_notes = None;
        branch.created_at = Utc::now();
        self.create_checkpoint(branch).await
    }

    /// Flag a checkpoint for human review. Reviewed-flagged snapshots are
    /// exempt from retention cleanup until the flag is cleared.
    pub async fn mark_review_required(
        &self,
        checkpoint_id: &str,
        notes: impl Into<String>,
    ) -> Result<(), CheckpointError> {
        let mut checkpoint = self.load_verified(checkpoint_id).await?;
        checkpoint.requires_review = true;
        checkpoint.review_notes = Some(notes.into());
        checkpoint.updated_at = Utc::now();
        self.store.save(&checkpoint).await
    }

    /// Newest-N retention. ACTIVE and review-required checkpoints are
    /// never deleted and the newest N overall are kept.
    pub async fn cleanup(&self, investigation_id: &str) -> Result<usize, CheckpointError> {
        let checkpoints = self.store.list_checkpoints(investigation_id).await?;
        let max = self.config.max_checkpoints_per_investigation;
        if checkpoints.len() <= max {
            return Ok(0);
        }

        let mut deleted = 0;
        for checkpoint in checkpoints.iter().skip(max) {
            if checkpoint.status == CheckpointStatus::Active || checkpoint.requires_review {
                continue;
            }
            self.store.delete(&checkpoint.checkpoint_id).await?;
            deleted += 1;
        }
        if deleted > 0 {
            debug!(investigation_id, deleted, "retention cleanup ran");
        }
        Ok(deleted)
    }

    /// Latest non-superseded checkpoint, if any.
    pub async fn latest(
        &self,
        investigation_id: &str,
    ) -> Result<Option<CheckpointData>, CheckpointError> {
        self.store.load_latest(investigation_id).await
    }
}
