//! Tasks for experimental design generation.
//!
//! Tasks are the computational units that workflows compose. Each submodule
//! performs one well-defined step and reports failures as
//! [`EngineError`](crate::engine::error::EngineError).

pub mod random_design;
