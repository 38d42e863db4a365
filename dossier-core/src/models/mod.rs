//! Shared models. One file per concept; everything here serializes to
//! JSON-compatible primitives because most of it ends up inside a
//! persisted checkpoint.

pub mod assessment;
pub mod checkpoint;
pub mod entity;
pub mod fact;
pub mod gap;
pub mod inconsistency;
pub mod investigation;
pub mod payload;
pub mod progress;
pub mod query;
pub mod state;
pub mod subject;

pub use assessment::{AssessmentResult, ConfidenceFactors, FactorWeights};
pub use checkpoint::{CheckpointCounters, CheckpointData, CheckpointStatus, ResumeStrategy};
pub use entity::{DiscoveredEntity, EntityKind};
pub use fact::{Fact, FactKind};
pub use gap::{Gap, GapCategory, GapKind, GapPriority};
pub use inconsistency::{classify, DetectedInconsistency, InconsistencyKind, InconsistencySeverity};
pub use investigation::{InvestigationResult, TypeOutcome};
pub use payload::{
    AddressRecord, CheckPayload, CriminalRecord, EducationRecord, EmploymentRecord, FilingRecord,
    IdentityRecord, LicenseRecord, MediaArticle, NetworkContact, SanctionsHit,
};
pub use progress::{ProgressEvent, ProgressEventKind};
pub use query::{CheckType, ProviderQuery, QueryResult, QueryStatus};
pub use state::{CompletionReason, SarIterationState, SarPhase, SarTypeState};
pub use subject::SubjectIdentifiers;
