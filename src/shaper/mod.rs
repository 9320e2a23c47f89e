//! # Shaper Module
//!
//! Joystick input shaping.
//!
//! This module handles:
//! - Clamping and sign inversion of raw stick samples
//! - Linear and squared response curves
//! - Deadband compensation for static friction
//! - Mutually exclusive power reduction levels

pub mod curve;
pub mod power;
pub mod stick;

pub use curve::{scale_linear, scale_squared, ResponseCurve, SignPolicy};
pub use power::PowerLevel;
pub use stick::ShaperConfig;
