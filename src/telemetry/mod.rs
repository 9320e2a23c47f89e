//! # Telemetry Module
//!
//! Formats per-iteration telemetry as JSON Lines.
//!
//! This module handles:
//! - Building a record from the pose, drive command and goal geometry
//! - Serializing one JSON object per line
//! - Writing records to any `std::io::Write` sink

pub mod record;

pub use record::{TelemetryRecord, TelemetryWriter};
