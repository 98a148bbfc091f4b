//! Master state machine driven by sub-status events.
//!
//! Each sub-status is treated as an event and applied to the current master
//! state through [`TRANSITION_TABLE`]. `Error` is absorbing. `Timeout` is left
//! only by an `error` event. A `done` event never moves `Running` back to `Done`.

use procstate_core::{MasterStatus, Result, SubStatus};
use tracing::{debug, trace};

use procstate_core::MasterStatus::{Done as D, Error as E, Running as R, Timeout as T};

/// Transition table indexed by `[state.index()][event.index()]`.
///
/// Columns are `new, running, done, error, timeout`; rows are
/// `Running, Done, Error, Timeout`.
pub const TRANSITION_TABLE: [[MasterStatus; 5]; 4] = [
    // new running done error timeout
    [R, R, R, E, T], // Running
    [R, R, D, E, T], // Done
    [E, E, E, E, E], // Error
    [T, T, T, E, T], // Timeout
];

/// Initial fold state; an empty event sequence therefore yields `Done`.
pub const INITIAL_STATE: MasterStatus = MasterStatus::Done;

/// Look up the state reached from `state` on `event`
pub const fn transition(state: MasterStatus, event: SubStatus) -> MasterStatus {
    TRANSITION_TABLE[state.index()][event.index()]
}

/// Apply events in order starting from `initial` and return the final state
pub fn fold<I>(initial: MasterStatus, events: I) -> MasterStatus
where
    I: IntoIterator<Item = SubStatus>,
{
    let mut count = 0usize;
    let status = events.into_iter().fold(initial, |state, event| {
        count += 1;
        let next = transition(state, event);
        trace!(%state, %event, %next, "transition");
        next
    });

    debug!(%initial, events = count, %status, "fold evaluation");
    status
}

/// Fold over raw event names.
///
/// Every name must be one of `new`, `running`, `done`, `error`, `timeout`.
/// The first unknown name aborts the whole fold with
/// [`CoreError::InvalidEvent`](procstate_core::CoreError::InvalidEvent).
pub fn fold_events<I, S>(initial: MasterStatus, names: I) -> Result<MasterStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let events = names
        .into_iter()
        .map(|name| name.as_ref().parse::<SubStatus>())
        .collect::<Result<Vec<_>>>()?;

    Ok(fold(initial, events))
}

/// Long-lived master state that keeps evolving as events arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterStateMachine {
    initial: MasterStatus,
    state: MasterStatus,
    transitions: u64,
}

impl Default for MasterStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterStateMachine {
    /// Create a machine in the `Done` state
    pub fn new() -> Self {
        Self::with_initial(INITIAL_STATE)
    }

    /// Create a machine starting (and resetting) to `initial`
    pub fn with_initial(initial: MasterStatus) -> Self {
        Self {
            initial,
            state: initial,
            transitions: 0,
        }
    }

    /// Current master state
    pub fn state(&self) -> MasterStatus {
        self.state
    }

    /// Number of events applied since creation or the last reset
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Apply one event and return the new state
    pub fn apply(&mut self, event: SubStatus) -> MasterStatus {
        let next = transition(self.state, event);
        if next != self.state {
            debug!(from = %self.state, %event, to = %next, "master state changed");
        }
        self.state = next;
        self.transitions += 1;
        next
    }

    /// Apply one event given by name; an unknown name leaves the state untouched
    pub fn apply_named(&mut self, name: &str) -> Result<MasterStatus> {
        let event = name.parse::<SubStatus>()?;
        Ok(self.apply(event))
    }

    /// Apply events in order and return the final state
    pub fn apply_all<I>(&mut self, events: I) -> MasterStatus
    where
        I: IntoIterator<Item = SubStatus>,
    {
        for event in events {
            self.apply(event);
        }
        self.state
    }

    /// Return to the initial state and clear the transition count
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.transitions = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procstate_core::CoreError;
    use SubStatus::*;

    #[test]
    fn test_table_matches_rules() {
        for event in SubStatus::ALL {
            assert_eq!(transition(MasterStatus::Error, event), MasterStatus::Error);
        }

        assert_eq!(transition(MasterStatus::Timeout, Error), MasterStatus::Error);
        for event in [New, Running, Done, Timeout] {
            assert_eq!(transition(MasterStatus::Timeout, event), MasterStatus::Timeout);
        }

        assert_eq!(transition(MasterStatus::Done, New), MasterStatus::Running);
        assert_eq!(transition(MasterStatus::Done, Running), MasterStatus::Running);
        assert_eq!(transition(MasterStatus::Done, Done), MasterStatus::Done);

        assert_eq!(transition(MasterStatus::Running, Done), MasterStatus::Running);
        assert_eq!(transition(MasterStatus::Running, Error), MasterStatus::Error);
        assert_eq!(transition(MasterStatus::Running, Timeout), MasterStatus::Timeout);
    }

    #[test]
    fn test_fold_scenarios() {
        assert_eq!(fold(INITIAL_STATE, [Done, Done, Done]), MasterStatus::Done);
        assert_eq!(fold(INITIAL_STATE, [Timeout, Done, Done]), MasterStatus::Timeout);
        assert_eq!(fold(INITIAL_STATE, [Done, Error, Done]), MasterStatus::Error);
        assert_eq!(fold(INITIAL_STATE, Vec::new()), MasterStatus::Done);
        assert_eq!(fold(INITIAL_STATE, [Timeout, Error]), MasterStatus::Error);
        assert_eq!(fold(INITIAL_STATE, [Error, Timeout]), MasterStatus::Error);
    }

    #[test]
    fn test_empty_fold_keeps_initial() {
        for initial in MasterStatus::ALL {
            assert_eq!(fold(initial, Vec::new()), initial);
        }
    }

    #[test]
    fn test_fold_events_by_name() {
        let status = fold_events(INITIAL_STATE, ["done", "running", "done"]).unwrap();
        assert_eq!(status, MasterStatus::Running);
    }

    #[test]
    fn test_fold_events_fails_fast() {
        // An error event precedes the bad name; no partial state comes back
        let result = fold_events(INITIAL_STATE, ["error", "paused", "done"]);
        assert!(matches!(result, Err(CoreError::InvalidEvent(ref name)) if name == "paused"));

        let result = fold_events(INITIAL_STATE, [""]);
        assert!(matches!(result, Err(CoreError::InvalidEvent(_))));
    }

    #[test]
    fn test_machine_keeps_state_across_calls() {
        let mut machine = MasterStateMachine::new();
        assert_eq!(machine.state(), MasterStatus::Done);

        assert_eq!(machine.apply(Running), MasterStatus::Running);
        assert_eq!(machine.apply(Done), MasterStatus::Running);
        assert_eq!(machine.apply_all([Timeout, Done]), MasterStatus::Timeout);
        assert_eq!(machine.transitions(), 4);

        machine.reset();
        assert_eq!(machine.state(), MasterStatus::Done);
        assert_eq!(machine.transitions(), 0);
    }

    #[test]
    fn test_machine_rejects_unknown_name() {
        let mut machine = MasterStateMachine::with_initial(MasterStatus::Running);
        assert!(machine.apply_named("cancelled").is_err());
        assert_eq!(machine.state(), MasterStatus::Running);
        assert_eq!(machine.transitions(), 0);

        assert_eq!(machine.apply_named("error").unwrap(), MasterStatus::Error);
    }
}
