//! # Core Module
//!
//! Stateless building blocks of an experimental design: the parameter-space
//! [`bounds`], the [`design`] container, and the two capabilities supplied by
//! callers, [`point`] (construction and compliance) and [`scoring`] (design
//! fitness).
//!
//! ## Overview
//!
//! A design is a fixed-size set of points drawn from an axis-aligned box in
//! parameter space. Every point is kept twice: as its normalized position in
//! `[0, 1]^n` and as the physical parameter vector obtained by rescaling that
//! position onto the box. Nothing in this module draws random numbers or runs
//! searches; that work belongs to [`crate::engine`] and [`crate::workflows`].
//!
//! ## Capabilities
//!
//! - **[`point::Point`]** is implemented by domain models. The core only asks
//!   a point to be built from a parameter vector and to report whether it is
//!   compliant. Derived physical quantities can be memoized with
//!   [`point::Derived`].
//! - **[`scoring::ScoreFunction`]** turns a finished design into a scalar,
//!   larger being better. [`scoring::Maximin`] is the reference criterion and
//!   any `Fn(&Design<P>) -> f64` closure works as well.

pub mod bounds;
pub mod design;
pub mod point;
pub mod scoring;
