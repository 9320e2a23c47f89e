//! # Field-Centric Drive Module
//!
//! Maps gamepad sticks to a robot-frame drive command.
//!
//! In field-centric driving, pushing the left stick up always moves the
//! robot away from the driver, whichever way the robot is facing. The
//! shaped stick vector is rotated by the negative of the robot heading
//! before it is handed to the drivetrain.
//!
//! ## Axis Assignments
//!
//! | Stick | Shaper | Command |
//! |-------|--------|---------|
//! | Left Y | `left_y` | Field X (negated, up = forward) |
//! | Left X | `left_x` | Field Y (negated, left = positive) |
//! | Right X | `right_x` | Rotation (negated, left = counter-clockwise) |
//!
//! ## Usage
//!
//! ```
//! use teleop_shaper::teleop::field_centric::FieldCentricDrive;
//! use teleop_shaper::teleop::sample::GamepadSample;
//!
//! let drive = FieldCentricDrive::default();
//! let mut sample = GamepadSample::default();
//! sample.left_stick_y = -1.0; // Full up
//!
//! let command = drive.drive_command(&sample)?;
//! assert!((command.x - 1.0).abs() < 1e-9);
//! # Ok::<(), teleop_shaper::error::ShaperError>(())
//! ```

use serde::Serialize;
use tracing::debug;

use super::sample::GamepadSample;
use crate::error::Result;
use crate::field::Pose;
use crate::shaper::{PowerLevel, ShaperConfig};

/// Robot-frame drive command, each component in -1.0..=1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DriveCommand {
    /// Forward power.
    pub x: f64,
    /// Leftward power.
    pub y: f64,
    /// Counter-clockwise turn power.
    pub rotation: f64,
}

/// Rotates the x/y part of `pose` by `angle` radians, keeping its heading.
///
/// ```text
/// x' = x cos(a) - y sin(a)
/// y' = x sin(a) + y cos(a)
/// ```
///
/// # Examples
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use teleop_shaper::field::Pose;
/// use teleop_shaper::teleop::field_centric::rotate_to_robot_frame;
///
/// let rotated = rotate_to_robot_frame(Pose::new(1.0, 0.0, 0.3), FRAC_PI_2);
/// assert!(rotated.x.abs() < 1e-9);
/// assert!((rotated.y - 1.0).abs() < 1e-9);
/// assert_eq!(rotated.heading, 0.3);
/// ```
#[must_use]
pub fn rotate_to_robot_frame(pose: Pose, angle: f64) -> Pose {
    let (sin, cos) = angle.sin_cos();
    Pose {
        x: pose.x * cos - pose.y * sin,
        y: pose.x * sin + pose.y * cos,
        heading: pose.heading,
    }
}

/// Shapes the three drive sticks and rotates them into the robot frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCentricDrive {
    /// Left stick X (strafe).
    pub left_x: ShaperConfig,
    /// Left stick Y (drive).
    pub left_y: ShaperConfig,
    /// Right stick X (turn).
    pub right_x: ShaperConfig,
}

impl Default for FieldCentricDrive {
    /// Squared response without deadband on the left stick and an unshaped
    /// right stick.
    fn default() -> Self {
        Self {
            left_x: ShaperConfig::squared(),
            left_y: ShaperConfig::squared(),
            right_x: ShaperConfig::linear(),
        }
    }
}

impl FieldCentricDrive {
    #[must_use]
    pub fn new(left_x: ShaperConfig, left_y: ShaperConfig, right_x: ShaperConfig) -> Self {
        Self {
            left_x,
            left_y,
            right_x,
        }
    }

    /// Toggles `level` on every axis.
    pub fn toggle_power(&mut self, level: PowerLevel) {
        self.left_x = self.left_x.toggle(level);
        self.left_y = self.left_y.toggle(level);
        self.right_x = self.right_x.toggle(level);
        debug!("Toggled {:?}, now at {}", level, self.active_level());
    }

    /// Engages `level` on every axis.
    pub fn set_power(&mut self, level: PowerLevel) {
        self.left_x = self.left_x.set_level(level);
        self.left_y = self.left_y.set_level(level);
        self.right_x = self.right_x.set_level(level);
        debug!("Power set to {}", level);
    }

    /// Applies the power-level request carried by `sample`, if any.
    ///
    /// A `set_level` request is applied before a `toggle` request.
    pub fn apply_power_request(&mut self, sample: &GamepadSample) {
        if let Some(level) = sample.set_level {
            self.set_power(level);
        }
        if let Some(level) = sample.toggle {
            self.toggle_power(level);
        }
    }

    /// Power level engaged on the drive (left Y) axis.
    #[must_use]
    pub fn active_level(&self) -> PowerLevel {
        self.left_y.active_level()
    }

    /// Computes the robot-frame command for `sample`.
    ///
    /// Uses the sample's pose heading, or zero heading (robot-centric) if the
    /// sample has no pose.
    ///
    /// # Errors
    ///
    /// Returns [`ShaperError::NanInput`](crate::error::ShaperError::NanInput)
    /// if any stick value is NaN.
    pub fn drive_command(&self, sample: &GamepadSample) -> Result<DriveCommand> {
        let heading = sample.pose_or_origin().heading;

        let field_input = Pose {
            x: -self.left_y.scale(sample.left_stick_y)?,
            y: -self.left_x.scale(sample.left_stick_x)?,
            heading: 0.0,
        };
        let robot_input = rotate_to_robot_frame(field_input, -heading);

        Ok(DriveCommand {
            x: robot_input.x,
            y: robot_input.y,
            rotation: -self.right_x.scale(sample.right_stick_x)?,
        })
    }
}
