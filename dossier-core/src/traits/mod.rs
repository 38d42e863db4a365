//! Collaborator seams. The engine never talks to providers, compliance
//! policy, or durable storage directly, only through these traits.

pub mod checkpoint_store;
pub mod compliance;
pub mod query_executor;

pub use checkpoint_store::ICheckpointStore;
pub use compliance::ICompliancePolicy;
pub use query_executor::IQueryExecutor;
