//! # Workflows Module
//!
//! High-level entry points that tie [`crate::core`] and [`crate::engine`]
//! together into complete design procedures.
//!
//! ## Overview
//!
//! - **Random Design** ([`design`]) - One design of a requested size, filled
//!   by rejection sampling from the parameter box with a caller-supplied
//!   random source.
//! - **Design Optimization** ([`optimize`]) - Monte-Carlo search that builds
//!   many independent random designs and keeps the one with the highest
//!   score. Trials run on the rayon thread pool when the `parallel` feature
//!   is enabled, with results identical to a sequential run for the same
//!   seed.
//!
//! Both workflows validate their inputs before drawing any samples and report
//! failures through [`crate::engine::error::EngineError`].

pub mod design;
pub mod optimize;
