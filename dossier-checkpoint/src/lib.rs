//! # dossier-checkpoint
//!
//! Durable investigation snapshots: the `CheckpointManager` enforces the
//! one-ACTIVE-per-investigation invariant, verifies content hashes on
//! load, builds resumption plans, branches, and applies newest-N
//! retention. Storage is pluggable behind `ICheckpointStore`, with
//! in-memory and JSON-file backends provided.

pub mod manager;
pub mod resume;
pub mod storage;

pub use manager::CheckpointManager;
pub use resume::ResumptionPlan;
pub use storage::{JsonFileStore, MemoryStore};
