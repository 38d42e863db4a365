/// Dossier system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed priority for sanctions/watchlist queries. Always the top of the batch.
pub const PRIORITY_SANCTIONS: u8 = 100;

/// Priority for refinement queries targeting a gap where nothing was found.
pub const PRIORITY_GAP_MISSING: u8 = 60;

/// Priority for refinement queries targeting an incomplete-coverage gap.
pub const PRIORITY_GAP_INCOMPLETE: u8 = 55;

/// Default priority for planned queries.
pub const PRIORITY_DEFAULT: u8 = 50;

/// Number of distinct source providers that counts as full source diversity.
pub const FULL_DIVERSITY_SOURCES: usize = 2;

/// Number of distinct providers required for a fact group to count as corroborated.
pub const CORROBORATION_MIN_SOURCES: usize = 2;

/// Weight applied to foundation types when aggregating investigation confidence.
pub const FOUNDATION_AGGREGATE_WEIGHT: f64 = 1.5;

/// Weight applied to non-foundation types when aggregating investigation confidence.
pub const DEFAULT_AGGREGATE_WEIGHT: f64 = 1.0;

/// Well-known list-shaped keys scanned by the generic extraction fallback.
pub const GENERIC_LIST_KEYS: &[&str] = &["records", "matches", "items", "results", "entries"];
