//! Re-export of the shared DTOs from `airside-types`.
// Consolidated re-exports so downstream crates can depend on `airside-core` only

pub use airside_types::{AirsideError, ChallengerMode, EngineConfig};
pub use airside_types::{AccuracyStats, ErrorRanges, ValidationRecord, ValueRange, WeeklySummary};
pub use airside_types::{AnnotatedValue, DailyValue, SourceSet};
pub use airside_types::{HolidayProximity, HolidaySpan, Provenance, ReconciledPoint};
pub use airside_types::WeekKey;
