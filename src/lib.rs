//! # Teleop Shaper Library
//!
//! Joystick input shaping and teleop tuning helpers for a competition robot.
//!
//! The core is the [`shaper`] module, which turns a raw stick axis sample into
//! a bounded motor command (sign inversion, response curve, deadband
//! compensation, power reduction). The remaining modules hold the small
//! amount of math the tuning routines need around it: goal distance and
//! bearing, field-centric joystick rotation, and encoder direction checks.

pub mod config;
pub mod error;
pub mod field;
pub mod shaper;
pub mod telemetry;
pub mod teleop;
