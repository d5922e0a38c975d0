use std::collections::HashSet;

use airside_core::types::{
    AirsideError, AnnotatedValue, ChallengerMode, DailyValue, EngineConfig, ValidationRecord,
};

use crate::snapshot::Snapshot;

/// One fully-derived recomputation of the throughput timeline.
///
/// An `Airside` is immutable once built: every view it exposes was derived
/// exactly once from the inputs handed to the builder. When any upstream
/// series changes, build a new one; construction is cheap and
/// side-effect-free, and concurrent rebuilds never interfere.
#[derive(Debug)]
pub struct Airside {
    pub(crate) snapshot: Snapshot,
}

/// Builder collecting the inputs for one engine recomputation.
pub struct AirsideBuilder {
    sources: airside_core::SourceSet,
    active_markets: HashSet<String>,
    validation: Vec<ValidationRecord>,
    cfg: EngineConfig,
}

impl Default for AirsideBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AirsideBuilder {
    /// Create a new builder with no inputs.
    ///
    /// Every series starts empty; a build over empty inputs succeeds and
    /// yields empty views, which is how "nothing fetched yet" is
    /// distinguished from an integrity failure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: airside_core::SourceSet::default(),
            active_markets: HashSet::new(),
            validation: Vec::new(),
            cfg: EngineConfig::default(),
        }
    }

    /// Supply the observed history series, one entry per past calendar day.
    #[must_use]
    pub fn history(mut self, rows: Vec<AnnotatedValue>) -> Self {
        self.sources.history = rows;
        self
    }

    /// Supply the baseline forecast series.
    ///
    /// May overlap the tail of the history; observed values win on overlap,
    /// so the same date is never counted twice.
    #[must_use]
    pub fn forecast(mut self, rows: Vec<AnnotatedValue>) -> Self {
        self.sources.forecast = rows;
        self
    }

    /// Supply the short-horizon nowcast points.
    ///
    /// Typically a single date. Nowcast values supersede both models but
    /// never observed data.
    #[must_use]
    pub fn nowcast(mut self, points: Vec<DailyValue>) -> Self {
        self.sources.nowcast = points;
        self
    }

    /// Supply the challenger (secondary model) forecast series.
    ///
    /// Participation is governed by [`ChallengerMode`]; leaving this unset
    /// is equivalent to having no challenger run at all.
    #[must_use]
    pub fn challenger(mut self, points: Vec<DailyValue>) -> Self {
        self.sources.challenger = Some(points);
        self
    }

    /// Supply the active market keys gating week selection.
    ///
    /// Passed explicitly rather than read from ambient state so the engine
    /// stays pure and independently testable.
    #[must_use]
    pub fn active_markets<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_markets = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Supply the ground-truth validation records behind the accuracy
    /// statistics.
    #[must_use]
    pub fn validation(mut self, records: Vec<ValidationRecord>) -> Self {
        self.validation = records;
        self
    }

    /// Replace the whole engine configuration.
    #[must_use]
    pub const fn config(mut self, cfg: EngineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select how the challenger series participates in reconciliation.
    #[must_use]
    pub const fn challenger_mode(mut self, mode: ChallengerMode) -> Self {
        self.cfg.challenger = mode;
        self
    }

    /// Bound accuracy statistics to the most recent `n` validation records.
    #[must_use]
    pub const fn validation_window(mut self, n: usize) -> Self {
        self.cfg.validation_window = Some(n);
        self
    }

    /// Run the recomputation and return the derived engine.
    ///
    /// # Errors
    /// Returns `AirsideError::DuplicateDate` if any single input series
    /// carries the same date twice. Empty inputs are not an error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "airside::build",
            skip(self),
            fields(
                history = self.sources.history.len(),
                forecast = self.sources.forecast.len(),
                active_markets = self.active_markets.len(),
            ),
        )
    )]
    pub fn build(self) -> Result<Airside, AirsideError> {
        let snapshot = Snapshot::derive(
            &self.sources,
            &self.active_markets,
            &self.validation,
            self.cfg,
        )?;
        Ok(Airside { snapshot })
    }
}

impl Airside {
    /// Start building a new engine instance.
    #[must_use]
    pub fn builder() -> AirsideBuilder {
        AirsideBuilder::new()
    }
}
