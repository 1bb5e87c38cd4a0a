//! # Engine Module
//!
//! The stateful machinery behind design construction and search.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Design size, trial count, seeding and
//!   the optional attempt limit, plus loading a complete problem definition
//!   from TOML.
//! - **State Tracking** ([`state`]) - Scored candidates and the mergeable
//!   search state that keeps the best design across trials.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//!   for phases, trials and score improvements.
//! - **Error Handling** ([`error`]) - The error type returned by every
//!   workflow, carrying failures from point models and score functions as
//!   the error source.
//!
//! Internal tasks implement rejection sampling of a single design, and the
//! sampling utilities derive one reproducible random stream per trial.

pub mod config;
pub mod error;
pub mod progress;
pub mod state;
pub(crate) mod tasks;
pub(crate) mod utils;
