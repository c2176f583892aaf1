//! Foundation types for Gantry.
//!
//! Geometry primitives and the error type shared by every Gantry crate.

pub mod error;
pub mod geometry;
