//! Airside-specific data transfer objects shared by the engine and its facade.
#![warn(missing_docs)]

mod config;
mod error;
mod provenance;
mod reports;
mod series;
mod week;

pub use config::{ChallengerMode, EngineConfig};
pub use error::AirsideError;
pub use provenance::{HolidayProximity, HolidaySpan, Provenance, ReconciledPoint};
pub use reports::{AccuracyStats, ErrorRanges, ValidationRecord, ValueRange, WeeklySummary};
pub use series::{AnnotatedValue, DailyValue, SourceSet};
pub use week::WeekKey;
