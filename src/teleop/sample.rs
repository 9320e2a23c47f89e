//! # Gamepad Sample Module
//!
//! One snapshot of driver input plus the robot state read alongside it.
//!
//! Samples arrive as JSON objects, one per line:
//!
//! ```json
//! {"left_stick_x": 0.1, "left_stick_y": -0.8, "right_stick_x": 0.0,
//!  "pose": {"x": 12.0, "y": -4.0, "heading": 0.3},
//!  "toggle": "half"}
//! ```
//!
//! Every field is optional; missing sticks read as centered.
//!
//! ## Fields
//!
//! | Field | Range | Description |
//! |-------|-------|-------------|
//! | `left_stick_x` | -1.0..1.0 | Strafe (right positive) |
//! | `left_stick_y` | -1.0..1.0 | Drive (up negative, gamepad convention) |
//! | `right_stick_x` | -1.0..1.0 | Turn |
//! | `pose` | inches / radians | Localizer estimate |
//! | `encoders` | counts | Raw dead-wheel counts |
//! | `push` | `forward` / `left` | Direction the robot is being pushed by hand |
//! | `toggle` | power level | Toggle a power level on every axis |
//! | `set_level` | power level | Engage a power level on every axis |

use serde::Deserialize;

use super::encoders::{EncoderReading, PushDirection};
use crate::error::Result;
use crate::field::Pose;
use crate::shaper::PowerLevel;

/// Driver input and robot state for a single loop iteration.
///
/// # Examples
///
/// ```
/// use teleop_shaper::teleop::sample::GamepadSample;
///
/// let sample = GamepadSample::default();
/// assert_eq!(sample.left_stick_x, 0.0);
/// assert!(sample.toggle.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GamepadSample {
    /// Left stick X axis. -1.0 = full left, 1.0 = full right.
    pub left_stick_x: f64,
    /// Left stick Y axis. -1.0 = full up, 1.0 = full down.
    pub left_stick_y: f64,
    /// Right stick X axis. -1.0 = full left, 1.0 = full right.
    pub right_stick_x: f64,

    /// Localizer pose estimate, if one was read.
    pub pose: Option<Pose>,
    /// Dead-wheel encoder counts, if they were read.
    pub encoders: Option<EncoderReading>,
    /// Set while the robot is pushed by hand for an encoder direction check.
    pub push: Option<PushDirection>,

    /// Power level toggled this iteration.
    pub toggle: Option<PowerLevel>,
    /// Power level set this iteration.
    pub set_level: Option<PowerLevel>,
}

impl GamepadSample {
    /// Parses a sample from a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns [`ShaperError::Json`](crate::error::ShaperError::Json) if
    /// the line isn't a valid sample object.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::shaper::PowerLevel;
    /// use teleop_shaper::teleop::sample::GamepadSample;
    ///
    /// let sample = GamepadSample::from_json_line(r#"{"left_stick_y": -1.0, "toggle": "quarter"}"#)?;
    /// assert_eq!(sample.left_stick_y, -1.0);
    /// assert_eq!(sample.toggle, Some(PowerLevel::Quarter));
    /// # Ok::<(), teleop_shaper::error::ShaperError>(())
    /// ```
    pub fn from_json_line(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Checks if any stick has moved further than `threshold` from center.
    #[must_use]
    pub fn any_stick_moved(&self, threshold: f64) -> bool {
        self.left_stick_x.abs() > threshold
            || self.left_stick_y.abs() > threshold
            || self.right_stick_x.abs() > threshold
    }

    /// The pose estimate, or the field origin if none was read.
    #[must_use]
    pub fn pose_or_origin(&self) -> Pose {
        self.pose.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_is_centered() {
        let sample = GamepadSample::default();
        assert_eq!(sample.left_stick_x, 0.0);
        assert_eq!(sample.left_stick_y, 0.0);
        assert_eq!(sample.right_stick_x, 0.0);
        assert!(sample.pose.is_none());
        assert!(sample.encoders.is_none());
        assert!(!sample.any_stick_moved(0.01));
    }

    #[test]
    fn test_parse_empty_object() {
        let sample = GamepadSample::from_json_line("{}").unwrap();
        assert_eq!(sample, GamepadSample::default());
    }

    #[test]
    fn test_parse_full_sample() {
        let line = r#"{
            "left_stick_x": 0.25,
            "left_stick_y": -0.5,
            "right_stick_x": 1.0,
            "pose": {"x": 1.0, "y": 2.0, "heading": 0.5},
            "encoders": {"left": 100.0, "right": 120.0, "lateral": -3.0},
            "push": "forward",
            "set_level": "ten_percent"
        }"#;
        let sample = GamepadSample::from_json_line(line).unwrap();

        assert_eq!(sample.left_stick_x, 0.25);
        assert_eq!(sample.left_stick_y, -0.5);
        assert_eq!(sample.right_stick_x, 1.0);
        assert_eq!(sample.pose, Some(Pose::new(1.0, 2.0, 0.5)));
        assert_eq!(sample.encoders.map(|e| e.lateral), Some(-3.0));
        assert_eq!(sample.push, Some(PushDirection::Forward));
        assert_eq!(sample.set_level, Some(PowerLevel::TenPercent));
        assert!(sample.toggle.is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GamepadSample::from_json_line("not json").is_err());
        assert!(GamepadSample::from_json_line(r#"{"toggle": "eleven"}"#).is_err());
    }

    #[test]
    fn test_any_stick_moved() {
        let mut sample = GamepadSample::default();
        sample.right_stick_x = -0.2;
        assert!(sample.any_stick_moved(0.1));
        assert!(!sample.any_stick_moved(0.3));
    }

    #[test]
    fn test_pose_or_origin() {
        let mut sample = GamepadSample::default();
        assert_eq!(sample.pose_or_origin(), Pose::default());

        sample.pose = Some(Pose::new(3.0, 4.0, 1.0));
        assert_eq!(sample.pose_or_origin(), Pose::new(3.0, 4.0, 1.0));
    }
}
