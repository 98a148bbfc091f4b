//! Direct evaluation: priority rules over the full set of sub-statuses.
//!
//! Rules, first match wins:
//! 1. no statuses → `Done`
//! 2. any `Error` → `Error`
//! 3. any `Timeout` → `Timeout`
//! 4. all `Done` → `Done`
//! 5. otherwise → `Running`
//!
//! The result depends only on which statuses are present, never on their order.

use procstate_core::{MasterStatus, SubStatus, SubUnit};
use tracing::debug;

/// Reduce a set of sub-statuses to a master status
pub fn evaluate(statuses: &[SubStatus]) -> MasterStatus {
    let status = if statuses.is_empty() {
        MasterStatus::Done
    } else if statuses.contains(&SubStatus::Error) {
        MasterStatus::Error
    } else if statuses.contains(&SubStatus::Timeout) {
        MasterStatus::Timeout
    } else if statuses.iter().all(|s| *s == SubStatus::Done) {
        MasterStatus::Done
    } else {
        MasterStatus::Running
    };

    debug!(units = statuses.len(), %status, "direct evaluation");
    status
}

/// Reduce the statuses reported by a set of units
pub fn evaluate_units(units: &[SubUnit]) -> MasterStatus {
    let statuses: Vec<SubStatus> = units.iter().map(SubUnit::status).collect();
    evaluate(&statuses)
}
