//! # Telemetry Records
//!
//! One JSON object per loop iteration:
//!
//! ```json
//! {"timestamp":"2026-10-16T12:00:00Z","x":12.0,"y":-4.0,"heading_deg":17.2,
//!  "drive":{"x":0.64,"y":0.0,"rotation":0.0},"power":"full",
//!  "distance_to_goal":61.0,"angle_to_goal":-7.9}
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::field::{GoalField, Pose};
use crate::shaper::PowerLevel;
use crate::teleop::encoders::EncoderDeltas;
use crate::teleop::field_centric::DriveCommand;

/// Snapshot of one teleop iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    pub timestamp: DateTime<Utc>,
    /// Robot X position (inches).
    pub x: f64,
    /// Robot Y position (inches).
    pub y: f64,
    /// Robot heading (degrees).
    pub heading_deg: f64,
    pub drive: DriveCommand,
    pub power: PowerLevel,
    /// Distance from the shooter to the goal (inches).
    pub distance_to_goal: f64,
    /// Field bearing from the shooter to the goal, degrees or radians per config.
    pub angle_to_goal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoders: Option<EncoderDeltas>,
}

impl TelemetryRecord {
    /// Builds a record for `pose`, measuring the goal from `pose` plus
    /// `shooter_offset`.
    #[must_use]
    pub fn new(
        pose: Pose,
        drive: DriveCommand,
        power: PowerLevel,
        field: &GoalField,
        shooter_offset: Pose,
        bearing_in_degrees: bool,
    ) -> Self {
        let shooter = pose.plus(shooter_offset);
        let bearing = field.angle_to_goal(shooter);

        Self {
            timestamp: Utc::now(),
            x: pose.x,
            y: pose.y,
            heading_deg: pose.heading.to_degrees(),
            drive,
            power,
            distance_to_goal: field.distance_to_goal(shooter),
            angle_to_goal: if bearing_in_degrees {
                bearing.to_degrees()
            } else {
                bearing
            },
            encoders: None,
        }
    }

    /// Attaches encoder deltas to the record.
    #[must_use]
    pub fn with_encoders(mut self, deltas: EncoderDeltas) -> Self {
        self.encoders = Some(deltas);
        self
    }

    /// Serializes the record as a single JSON line (no trailing newline).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Writes telemetry records as JSON Lines.
#[derive(Debug)]
pub struct TelemetryWriter<W: Write> {
    sink: W,
    records_written: u64,
}

impl<W: Write> TelemetryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            records_written: 0,
        }
    }

    /// Writes one record followed by a newline and flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_record(&mut self, record: &TelemetryRecord) -> Result<()> {
        let line = record.to_json_line()?;
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()?;
        self.records_written += 1;
        Ok(())
    }

    #[must_use]
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
