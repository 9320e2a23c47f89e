//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, ShaperError};
use crate::field::{FieldPoint, GoalField, Pose, TOWER_GOAL};
use crate::shaper::{ResponseCurve, ShaperConfig, SignPolicy};
use crate::teleop::field_centric::FieldCentricDrive;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub left_stick_x: AxisConfig,

    #[serde(default)]
    pub left_stick_y: AxisConfig,

    #[serde(default = "default_rotation_axis")]
    pub right_stick_x: AxisConfig,

    #[serde(default)]
    pub field: FieldConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Shaping parameters for one stick axis
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    #[serde(default)]
    pub curve: ResponseCurve,

    #[serde(default)]
    pub deadband: f64,

    #[serde(default)]
    pub sign: SignPolicy,

    #[serde(default = "default_reduction_factor")]
    pub reduction_factor: f64,
}

/// Field geometry configuration
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    #[serde(default = "default_goal_x")]
    pub goal_x: f64,

    #[serde(default = "default_goal_y")]
    pub goal_y: f64,

    #[serde(default)]
    pub shooter_offset_x: f64,

    #[serde(default)]
    pub shooter_offset_y: f64,
}

/// Telemetry configuration
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default = "default_bearing_in_degrees")]
    pub bearing_in_degrees: bool,

    #[serde(default = "default_encoder_min_counts")]
    pub encoder_min_counts: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_stick_x: AxisConfig::default(),
            left_stick_y: AxisConfig::default(),
            right_stick_x: default_rotation_axis(),
            field: FieldConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            curve: ResponseCurve::Squared,
            deadband: 0.0,
            sign: SignPolicy::Normal,
            reduction_factor: default_reduction_factor(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            goal_x: default_goal_x(),
            goal_y: default_goal_y(),
            shooter_offset_x: 0.0,
            shooter_offset_y: 0.0,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            bearing_in_degrees: default_bearing_in_degrees(),
            encoder_min_counts: default_encoder_min_counts(),
        }
    }
}

// Default value functions
fn default_rotation_axis() -> AxisConfig {
    AxisConfig {
        curve: ResponseCurve::Linear,
        ..AxisConfig::default()
    }
}
fn default_reduction_factor() -> f64 { 1.0 }

fn default_goal_x() -> f64 { TOWER_GOAL.x }
fn default_goal_y() -> f64 { TOWER_GOAL.y }

fn default_bearing_in_degrees() -> bool { true }
fn default_encoder_min_counts() -> f64 { 50.0 }

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use teleop_shaper::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        for (name, axis) in [
            ("left_stick_x", &self.left_stick_x),
            ("left_stick_y", &self.left_stick_y),
            ("right_stick_x", &self.right_stick_x),
        ] {
            if !(0.0..1.0).contains(&axis.deadband) {
                return Err(ShaperError::Config(toml::de::Error::custom(format!(
                    "{}.deadband must be at least 0.0 and less than 1.0",
                    name
                ))));
            }

            if !(0.0..=1.0).contains(&axis.reduction_factor) {
                return Err(ShaperError::Config(toml::de::Error::custom(format!(
                    "{}.reduction_factor must be between 0.0 and 1.0",
                    name
                ))));
            }
        }

        // Validate field coordinates
        for (name, value) in [
            ("goal_x", self.field.goal_x),
            ("goal_y", self.field.goal_y),
            ("shooter_offset_x", self.field.shooter_offset_x),
            ("shooter_offset_y", self.field.shooter_offset_y),
        ] {
            if !value.is_finite() {
                return Err(ShaperError::Config(toml::de::Error::custom(format!(
                    "field.{} must be a finite number",
                    name
                ))));
            }
        }

        if !self.telemetry.encoder_min_counts.is_finite() || self.telemetry.encoder_min_counts < 0.0 {
            return Err(ShaperError::Config(toml::de::Error::custom(
                "telemetry.encoder_min_counts must be a non-negative number",
            )));
        }

        Ok(())
    }

    /// Builds the field-centric drive from the three axis sections
    ///
    /// # Errors
    ///
    /// Returns error if an axis section holds out-of-range values
    pub fn drive(&self) -> Result<FieldCentricDrive> {
        Ok(FieldCentricDrive::new(
            self.left_stick_x.shaper()?,
            self.left_stick_y.shaper()?,
            self.right_stick_x.shaper()?,
        ))
    }

    /// Goal location from the `[field]` section
    #[must_use]
    pub fn goal_field(&self) -> GoalField {
        GoalField::new(FieldPoint::new(self.field.goal_x, self.field.goal_y))
    }

    /// Shooter mounting offset relative to the robot pose
    #[must_use]
    pub fn shooter_offset(&self) -> Pose {
        Pose::new(self.field.shooter_offset_x, self.field.shooter_offset_y, 0.0)
    }
}

impl AxisConfig {
    /// Converts the section into a validated shaper
    pub fn shaper(&self) -> Result<ShaperConfig> {
        ShaperConfig::new(self.curve, self.deadband, self.sign, self.reduction_factor)
    }
}
