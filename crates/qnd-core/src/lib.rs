//! # QND Core Library
//!
//! Quick-and-dirty experimental design: builds space-filling sets of points
//! inside a box-bounded parameter space, keeping only points that a domain
//! model declares compliant, and searches for the design that maximizes a
//! caller-supplied score.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless models: [`core::bounds::Bounds`],
//!   [`core::design::Design`], the [`core::point::Point`] capability
//!   implemented by domain models, and the [`core::scoring::ScoreFunction`]
//!   capability with the reference [`core::scoring::Maximin`] criterion.
//!
//! - **[`engine`]: The Logic Core.** Configuration, rejection sampling,
//!   per-trial random streams, search state and progress reporting.
//!
//! - **[`workflows`]: The Public API.**
//!   [`workflows::design::random_design`] builds one design and
//!   [`workflows::optimize::designopt_mc`] runs the Monte-Carlo search.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
mod test_utils;
