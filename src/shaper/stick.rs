//! # Stick Shaper Configuration
//!
//! Per-axis shaping parameters and the checked `scale` entry point.
//!
//! A [`ShaperConfig`] is a small `Copy` value. Power toggles do not mutate it
//! in place; they return the next configuration, which the owning axis
//! stores in place of the old one.
//!
//! ## Usage
//!
//! ```
//! use teleop_shaper::shaper::{PowerLevel, ResponseCurve, ShaperConfig, SignPolicy};
//!
//! let axis = ShaperConfig::new(ResponseCurve::Squared, 0.2, SignPolicy::Normal, 1.0)?;
//! assert!((axis.scale(0.5)? - 0.4).abs() < 1e-9);
//!
//! let axis = axis.toggle(PowerLevel::Half);
//! assert!((axis.scale(0.5)? - 0.2).abs() < 1e-9);
//!
//! let axis = axis.toggle(PowerLevel::Half);
//! assert_eq!(axis.reduction_factor(), 1.0);
//! # Ok::<(), teleop_shaper::error::ShaperError>(())
//! ```

use super::curve::{ResponseCurve, SignPolicy};
use super::power::PowerLevel;
use crate::error::{Result, ShaperError};

/// Deadband used by [`ShaperConfig::default`].
pub const DEFAULT_DEADBAND: f64 = 0.15;

/// Shaping parameters for one control axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaperConfig {
    curve: ResponseCurve,
    /// Fraction of full output (0.0 to <1.0).
    deadband: f64,
    sign: SignPolicy,
    /// Multiplier on the final output (0.0 to 1.0). This, not
    /// `active_level`, decides the output.
    reduction_factor: f64,
    /// Engaged power level, tracked for toggle semantics.
    active_level: PowerLevel,
}

impl Default for ShaperConfig {
    /// Squared curve, 0.15 deadband, no inversion, full power.
    fn default() -> Self {
        Self {
            curve: ResponseCurve::Squared,
            deadband: DEFAULT_DEADBAND,
            sign: SignPolicy::Normal,
            reduction_factor: 1.0,
            active_level: PowerLevel::Full,
        }
    }
}

impl ShaperConfig {
    /// Creates a validated axis configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShaperError::InvalidConfig`] if `deadband` is outside
    /// 0.0..1.0 or `reduction_factor` is outside 0.0..=1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::shaper::{ResponseCurve, ShaperConfig, SignPolicy};
    ///
    /// assert!(ShaperConfig::new(ResponseCurve::Squared, 0.1, SignPolicy::Inverted, 0.5).is_ok());
    /// assert!(ShaperConfig::new(ResponseCurve::Squared, 1.0, SignPolicy::Normal, 1.0).is_err());
    /// ```
    pub fn new(
        curve: ResponseCurve,
        deadband: f64,
        sign: SignPolicy,
        reduction_factor: f64,
    ) -> Result<Self> {
        validate_deadband(deadband)?;
        validate_reduction_factor(reduction_factor)?;

        Ok(Self {
            curve,
            deadband,
            sign,
            reduction_factor,
            active_level: PowerLevel::Full,
        })
    }

    /// Linear response, no inversion, full power.
    #[must_use]
    pub fn linear() -> Self {
        Self {
            curve: ResponseCurve::Linear,
            deadband: 0.0,
            ..Self::default()
        }
    }

    /// Squared response with no deadband compensation.
    #[must_use]
    pub fn squared() -> Self {
        Self {
            curve: ResponseCurve::Squared,
            deadband: 0.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn curve(&self) -> ResponseCurve {
        self.curve
    }

    #[must_use]
    pub fn deadband(&self) -> f64 {
        self.deadband
    }

    #[must_use]
    pub fn sign(&self) -> SignPolicy {
        self.sign
    }

    #[must_use]
    pub fn reduction_factor(&self) -> f64 {
        self.reduction_factor
    }

    #[must_use]
    pub fn active_level(&self) -> PowerLevel {
        self.active_level
    }

    /// Returns a copy using `curve`.
    #[must_use]
    pub fn with_curve(self, curve: ResponseCurve) -> Self {
        Self { curve, ..self }
    }

    /// Returns a copy using `sign`.
    #[must_use]
    pub fn with_sign(self, sign: SignPolicy) -> Self {
        Self { sign, ..self }
    }

    /// Returns a copy using `deadband`.
    ///
    /// # Errors
    ///
    /// Returns [`ShaperError::InvalidConfig`] if `deadband` is outside 0.0..1.0.
    pub fn with_deadband(self, deadband: f64) -> Result<Self> {
        validate_deadband(deadband)?;
        Ok(Self { deadband, ..self })
    }

    /// Shapes a raw stick sample into a motor command in -1.0..=1.0.
    ///
    /// The sample is clamped, sign-adjusted, run through the response curve
    /// (with deadband compensation for the squared curve), then multiplied by
    /// the reduction factor.
    ///
    /// # Errors
    ///
    /// Returns [`ShaperError::NanInput`] if `raw` is NaN. Infinite samples
    /// are clamped like any other out-of-range value.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::shaper::ShaperConfig;
    ///
    /// let axis = ShaperConfig::default();
    /// assert_eq!(axis.scale(0.0)?, 0.0);
    /// assert!(axis.scale(f64::NAN).is_err());
    /// # Ok::<(), teleop_shaper::error::ShaperError>(())
    /// ```
    pub fn scale(&self, raw: f64) -> Result<f64> {
        if raw.is_nan() {
            return Err(ShaperError::NanInput);
        }

        let clamped = raw.clamp(-1.0, 1.0);
        let signed = self.sign.apply(clamped);
        Ok(self.curve.apply(signed, self.reduction_factor, self.deadband))
    }

    /// Toggles `level`: engages it if it isn't engaged, otherwise returns to
    /// full power.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::shaper::{PowerLevel, ShaperConfig};
    ///
    /// let axis = ShaperConfig::default().toggle(PowerLevel::Quarter);
    /// assert_eq!(axis.reduction_factor(), 0.25);
    ///
    /// let axis = axis.toggle(PowerLevel::Quarter);
    /// assert_eq!(axis.reduction_factor(), 1.0);
    /// assert_eq!(axis.active_level(), PowerLevel::Full);
    /// ```
    #[must_use]
    pub fn toggle(self, level: PowerLevel) -> Self {
        if self.active_level == level {
            self.set_level(PowerLevel::Full)
        } else {
            self.set_level(level)
        }
    }

    /// Engages `level`, disengaging any other level.
    #[must_use]
    pub fn set_level(self, level: PowerLevel) -> Self {
        Self {
            reduction_factor: level.multiplier(),
            active_level: level,
            ..self
        }
    }

    /// Returns to full power.
    #[must_use]
    pub fn set_full_power(self) -> Self {
        self.set_level(PowerLevel::Full)
    }
}

fn validate_deadband(deadband: f64) -> Result<()> {
    if !(0.0..1.0).contains(&deadband) {
        return Err(ShaperError::InvalidConfig(format!(
            "deadband must be in 0.0..1.0, got {}",
            deadband
        )));
    }
    Ok(())
}

fn validate_reduction_factor(reduction_factor: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&reduction_factor) {
        return Err(ShaperError::InvalidConfig(format!(
            "reduction_factor must be in 0.0..=1.0, got {}",
            reduction_factor
        )));
    }
    Ok(())
}
