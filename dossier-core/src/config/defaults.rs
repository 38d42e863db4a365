//! Default values backing the config structs.

// Planner / refiner.
pub const DEFAULT_MAX_QUERIES_PER_ITERATION: usize = 12;
pub const DEFAULT_MAX_QUERIES_PER_GAP: usize = 2;
pub const DEFAULT_MAX_TOTAL_QUERIES: usize = 10;

// Iteration control.
pub const DEFAULT_MAX_ITERATIONS_PER_TYPE: u32 = 4;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.80;
pub const DEFAULT_FOUNDATION_THRESHOLD_BOOST: f64 = 0.05;
pub const DEFAULT_MIN_GAIN_THRESHOLD: f64 = 0.15;

// Checkpointing.
pub const DEFAULT_MAX_CHECKPOINTS_PER_INVESTIGATION: usize = 5;
pub const DEFAULT_AUTO_CLEANUP: bool = true;
pub const DEFAULT_CHECKPOINT_INTERVAL_TYPES: usize = 1;

// Orchestration.
pub const DEFAULT_CONTINUE_ON_TYPE_ERROR: bool = true;
pub const DEFAULT_MAX_CONCURRENT_TYPES: usize = 1;
pub const DEFAULT_PROGRESS_CHANNEL_CAPACITY: usize = 64;
