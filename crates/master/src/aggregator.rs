//! Aggregator over a fixed snapshot of sub-units.
//!
//! The aggregator never mutates its units. The master status is computed on
//! demand in the configured mode; [`Aggregator::refresh`] caches the latest
//! result so supervisors can report it without recomputing.

use crate::evaluate::evaluate;
use crate::machine::{fold, INITIAL_STATE};
use procstate_core::{
    AggregationConfig, AggregationMode, MasterStatus, Result, SubStatus, SubUnit,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Results of both aggregation modes over the same units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeComparison {
    /// Result of direct evaluation
    pub direct: MasterStatus,
    /// Result of the state-machine fold
    pub fold: MasterStatus,
}

impl ModeComparison {
    /// The two modes disagree for this input
    pub fn diverges(&self) -> bool {
        self.direct != self.fold
    }
}

/// Derives the master status from a snapshot of sub-units
#[derive(Debug, Clone)]
pub struct Aggregator {
    mode: AggregationMode,
    initial_state: MasterStatus,
    units: Vec<SubUnit>,
    state: MasterStatus,
}

impl Aggregator {
    /// Direct-mode aggregator over `units`
    pub fn new(units: Vec<SubUnit>) -> Self {
        Self::from_config(&AggregationConfig::default(), units)
    }

    /// Aggregator using the configured mode and fold initial state
    pub fn from_config(config: &AggregationConfig, units: Vec<SubUnit>) -> Self {
        let mut aggregator = Self {
            mode: config.mode,
            initial_state: config.initial_state,
            units,
            state: INITIAL_STATE,
        };
        aggregator.refresh();
        aggregator
    }

    /// Build units from raw status names, rejecting the whole snapshot on the
    /// first unknown name
    pub fn from_names<I, S>(config: &AggregationConfig, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let units = names
            .into_iter()
            .map(|name| name.as_ref().parse::<SubStatus>().map(SubUnit::from))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_config(config, units))
    }

    /// Switch aggregation mode, recomputing the cached state
    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self.refresh();
        self
    }

    /// Active aggregation mode
    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// Units in fold order
    pub fn units(&self) -> &[SubUnit] {
        &self.units
    }

    /// State cached by the last [`refresh`](Self::refresh)
    pub fn state(&self) -> MasterStatus {
        self.state
    }

    /// Compute the master status in the configured mode
    pub fn current_state(&self) -> MasterStatus {
        match self.mode {
            AggregationMode::Direct => self.evaluate_direct(),
            AggregationMode::Fold => self.evaluate_fold(),
        }
    }

    /// Recompute and cache the master status
    pub fn refresh(&mut self) -> MasterStatus {
        self.state = self.current_state();
        debug!(mode = ?self.mode, units = self.units.len(), state = %self.state, "master state refreshed");
        self.state
    }

    /// Priority-rule result, regardless of configured mode
    pub fn evaluate_direct(&self) -> MasterStatus {
        evaluate(&self.statuses())
    }

    /// Fold unit statuses in order from the configured initial state
    pub fn evaluate_fold(&self) -> MasterStatus {
        fold(self.initial_state, self.units.iter().map(SubUnit::status))
    }

    /// Run both modes and report whether they disagree
    pub fn compare(&self) -> ModeComparison {
        let comparison = ModeComparison {
            direct: self.evaluate_direct(),
            fold: self.evaluate_fold(),
        };

        if comparison.diverges() {
            warn!(
                direct = %comparison.direct,
                fold = %comparison.fold,
                initial = %self.initial_state,
                "aggregation modes disagree"
            );
        }

        comparison
    }

    fn statuses(&self) -> Vec<SubStatus> {
        self.units.iter().map(SubUnit::status).collect()
    }
}
