//! Core functionality for the procstate status aggregation system.
//!
//! This crate provides the status vocabulary, error type, logging setup and
//! configuration shared across the procstate crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{AggregationConfig, AggregationMode, Config, LogFormat, LoggingConfig};
pub use error::{CoreError, Result};
pub use types::{MasterStatus, SubStatus, SubUnit};
