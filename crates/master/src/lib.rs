//! Master status aggregation for procstate.
//!
//! Derives one master status from the statuses reported by a set of sub-units.
//! Two independent algorithms are provided:
//! - **Direct evaluation** ([`evaluate`]): priority rules over the whole set.
//!   Failure dominates, timeout comes second, completion requires every unit
//!   to be done, anything else is still running.
//! - **State-machine fold** ([`fold`]): each sub-status is an event applied in
//!   order to the master state through [`TRANSITION_TABLE`].
//!
//! The two modes are separate contracts and callers must not assume they agree.
//!
//! # Examples
//!
//! ```
//! use procstate_master::{evaluate, fold, INITIAL_STATE};
//! use procstate_core::{MasterStatus, SubStatus};
//!
//! let statuses = [SubStatus::Done, SubStatus::Timeout, SubStatus::Done];
//! assert_eq!(evaluate(&statuses), MasterStatus::Timeout);
//! assert_eq!(fold(INITIAL_STATE, statuses), MasterStatus::Timeout);
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod evaluate;
pub mod machine;

pub use aggregator::{Aggregator, ModeComparison};
pub use evaluate::{evaluate, evaluate_units};
pub use machine::{
    fold, fold_events, transition, MasterStateMachine, INITIAL_STATE, TRANSITION_TABLE,
};
