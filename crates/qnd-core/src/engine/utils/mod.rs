//! Utility functions for the engine module.
//!
//! Random-number plumbing shared by the design builder and the optimizer:
//! uniform draws from the unit hypercube and per-trial seed derivation.

pub mod sampling;
