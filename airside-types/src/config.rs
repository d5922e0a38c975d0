//! Engine configuration shared by the facade and the core.

use serde::{Deserialize, Serialize};

/// How the challenger (secondary model) series participates in
/// reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ChallengerMode {
    /// Challenger values fill dates the baseline forecast would otherwise
    /// own, and dates no other source covers; observed and nowcast data
    /// always win.
    #[default]
    Fallback,
    /// Ignore the challenger series entirely, as if it had not been
    /// supplied.
    Ignore,
}

/// Configuration for one engine recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Challenger participation mode.
    pub challenger: ChallengerMode,
    /// Number of most recent validation records used for accuracy
    /// statistics; `None` uses every record supplied.
    pub validation_window: Option<usize>,
}
