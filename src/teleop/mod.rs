//! # Teleop Module
//!
//! Driver-facing glue around the shaper.
//!
//! This module handles:
//! - Parsing gamepad samples
//! - Field-centric rotation of the drive sticks
//! - Power-level requests from the driver
//! - Encoder direction checks

pub mod encoders;
pub mod field_centric;
pub mod sample;
