//! Status vocabulary shared by every aggregation mode
//!
//! A sub-status is what one unit of work reports. The same five values double
//! as the event names driving the master state machine.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reported state of one unit of work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubStatus {
    /// Unit has been created but not started
    #[default]
    New,
    /// Unit is in progress
    Running,
    /// Unit completed
    Done,
    /// Unit failed
    Error,
    /// Unit exceeded its time allowance
    Timeout,
}

impl SubStatus {
    /// Every sub-status, in declaration order
    pub const ALL: [SubStatus; 5] = [
        SubStatus::New,
        SubStatus::Running,
        SubStatus::Done,
        SubStatus::Error,
        SubStatus::Timeout,
    ];

    /// Canonical lowercase event name
    pub const fn as_str(&self) -> &'static str {
        match self {
            SubStatus::New => "new",
            SubStatus::Running => "running",
            SubStatus::Done => "done",
            SubStatus::Error => "error",
            SubStatus::Timeout => "timeout",
        }
    }

    /// Column of this event in the transition table
    pub const fn index(&self) -> usize {
        match self {
            SubStatus::New => 0,
            SubStatus::Running => 1,
            SubStatus::Done => 2,
            SubStatus::Error => 3,
            SubStatus::Timeout => 4,
        }
    }
}

impl fmt::Display for SubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidEvent(s.to_string()))
    }
}

/// Aggregate state of the supervising process
///
/// There is no `New`: an aggregate is either in progress or already settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasterStatus {
    /// At least one unit is still outstanding
    Running,
    /// All units completed (or there are none)
    Done,
    /// At least one unit failed
    Error,
    /// At least one unit timed out
    Timeout,
}

impl MasterStatus {
    /// Every master status, in transition-table row order
    pub const ALL: [MasterStatus; 4] = [
        MasterStatus::Running,
        MasterStatus::Done,
        MasterStatus::Error,
        MasterStatus::Timeout,
    ];

    /// Canonical lowercase state name
    pub const fn as_str(&self) -> &'static str {
        match self {
            MasterStatus::Running => "running",
            MasterStatus::Done => "done",
            MasterStatus::Error => "error",
            MasterStatus::Timeout => "timeout",
        }
    }

    /// Row of this state in the transition table
    pub const fn index(&self) -> usize {
        match self {
            MasterStatus::Running => 0,
            MasterStatus::Done => 1,
            MasterStatus::Error => 2,
            MasterStatus::Timeout => 3,
        }
    }

    /// No event leaves this state
    pub fn is_absorbing(&self) -> bool {
        matches!(self, MasterStatus::Error)
    }

    /// Check if the aggregate reflects a failed or timed-out unit
    pub fn is_failure(&self) -> bool {
        matches!(self, MasterStatus::Error | MasterStatus::Timeout)
    }
}

impl fmt::Display for MasterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MasterStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MasterStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidState(s.to_string()))
    }
}

/// One monitored unit of work, as seen by the aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubUnit {
    status: SubStatus,
}

impl SubUnit {
    /// Create a unit in the `New` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a unit that reports the given status
    pub fn with_status(status: SubStatus) -> Self {
        Self { status }
    }

    /// Reported status
    pub fn status(&self) -> SubStatus {
        self.status
    }
}

impl From<SubStatus> for SubUnit {
    fn from(status: SubStatus) -> Self {
        Self::with_status(status)
    }
}
