//! # Response Curves
//!
//! Shaping functions mapping a normalized stick value (-1.0 to 1.0) to a
//! normalized output command (-1.0 to 1.0).
//!
//! ## Linear
//!
//! `output = input * reduction`. A straight line; the driver gets the same
//! resolution everywhere on the stick, which means little fine control at
//! low speeds. No deadband term is applied.
//!
//! ## Squared
//!
//! The output is made of two portions: a squared portion and a deadband
//! portion that shifts the curve up to overcome static friction.
//!
//! ```text
//! output = (sign * input²) * (1 - deadband) + deadband * sign
//! ```
//!
//! With a deadband of 0.2 the squared portion can contribute at most 0.8, so
//! the two portions still sum to 1.0 at full deflection. Inputs under 1% of
//! full scale get no deadband portion so that a resting stick commands 0.

use serde::{Deserialize, Serialize};

/// Lower bound of a stick axis and of a shaped command.
pub const OUTPUT_MIN: f64 = -1.0;
/// Upper bound of a stick axis and of a shaped command.
pub const OUTPUT_MAX: f64 = 1.0;

/// Inputs with a magnitude below this fraction of full scale receive no
/// deadband portion.
pub const NEAR_ZERO_THRESHOLD: f64 = 0.01;

/// Shaping function applied to the normalized stick value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCurve {
    /// Output proportional to input.
    Linear,
    /// Output proportional to input squared, sign preserved.
    #[default]
    Squared,
}

/// Whether the stick value is negated before shaping.
///
/// Gamepad Y axes report "up" as negative; `Inverted` flips that so up is
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignPolicy {
    /// Pass the value through.
    #[default]
    Normal,
    /// Multiply the value by -1.
    Inverted,
}

impl SignPolicy {
    /// Applies the policy to a stick value.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::shaper::curve::SignPolicy;
    ///
    /// assert_eq!(SignPolicy::Normal.apply(0.3), 0.3);
    /// assert_eq!(SignPolicy::Inverted.apply(0.3), -0.3);
    /// ```
    #[inline]
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            SignPolicy::Normal => value,
            SignPolicy::Inverted => -value,
        }
    }
}

/// Sign of a stick value, with zero counted as positive.
#[inline]
fn sign_control(value: f64) -> f64 {
    if value == 0.0 {
        1.0
    } else {
        value.signum()
    }
}

/// Scales a stick value linearly and applies a reduction factor.
///
/// NaN passes straight through; use
/// [`ShaperConfig::scale`](super::stick::ShaperConfig::scale) for a checked
/// entry point.
///
/// # Examples
///
/// ```
/// use teleop_shaper::shaper::curve::scale_linear;
///
/// assert_eq!(scale_linear(0.8, 0.5), 0.4);
/// assert_eq!(scale_linear(3.0, 1.0), 1.0);
/// ```
#[must_use]
pub fn scale_linear(value: f64, reduction_factor: f64) -> f64 {
    let value = value.clamp(OUTPUT_MIN, OUTPUT_MAX);
    (value * reduction_factor).clamp(OUTPUT_MIN, OUTPUT_MAX)
}

/// Scales a stick value along a squared curve shifted up by `deadband`,
/// then applies a reduction factor.
///
/// # Arguments
///
/// * `value` - Stick value, clamped to -1.0..1.0 before use
/// * `reduction_factor` - Final multiplier (0.0 to 1.0)
/// * `deadband` - Minimum output magnitude once the stick leaves center (0.0 to <1.0)
///
/// # Examples
///
/// ```
/// use teleop_shaper::shaper::curve::scale_squared;
///
/// // 0.5² * 0.8 + 0.2
/// assert!((scale_squared(0.5, 1.0, 0.2) - 0.4).abs() < 1e-9);
/// assert_eq!(scale_squared(0.0, 1.0, 0.2), 0.0);
/// ```
#[must_use]
pub fn scale_squared(value: f64, reduction_factor: f64, deadband: f64) -> f64 {
    let signed = sign_control(value);
    let value = value.clamp(OUTPUT_MIN, OUTPUT_MAX);

    let squared = (value / OUTPUT_MAX).powi(2) * signed;

    let deadband_term = if value.abs() < NEAR_ZERO_THRESHOLD * OUTPUT_MAX {
        0.0
    } else {
        deadband
    };
    let max_squared_term = OUTPUT_MAX - deadband_term;

    let output = (squared * max_squared_term + deadband_term * signed) * reduction_factor;
    output.clamp(OUTPUT_MIN, OUTPUT_MAX)
}

impl ResponseCurve {
    /// Shapes an already sign-adjusted stick value.
    ///
    /// `deadband` is ignored by [`ResponseCurve::Linear`].
    #[must_use]
    pub fn apply(self, value: f64, reduction_factor: f64, deadband: f64) -> f64 {
        match self {
            ResponseCurve::Linear => scale_linear(value, reduction_factor),
            ResponseCurve::Squared => scale_squared(value, reduction_factor, deadband),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ==================== Sign Tests ====================

    #[test]
    fn test_sign_policy_default_is_normal() {
        assert_eq!(SignPolicy::default(), SignPolicy::Normal);
    }

    #[test]
    fn test_sign_control_zero_is_positive() {
        assert_eq!(sign_control(0.0), 1.0);
        assert_eq!(sign_control(-0.0), 1.0);
        assert_eq!(sign_control(-0.3), -1.0);
    }

    // ==================== Linear Tests ====================

    #[test]
    fn test_linear_passthrough_at_full_power() {
        for input in [-1.0, -0.5, 0.0, 0.25, 1.0] {
            assert!((scale_linear(input, 1.0) - input).abs() < EPS);
        }
    }

    #[test]
    fn test_linear_clamps_input_before_reduction() {
        // 4.0 clamps to 1.0 first, then halves
        assert!((scale_linear(4.0, 0.5) - 0.5).abs() < EPS);
        assert!((scale_linear(-4.0, 0.5) + 0.5).abs() < EPS);
    }

    #[test]
    fn test_linear_ignores_deadband() {
        let result = ResponseCurve::Linear.apply(0.1, 1.0, 0.5);
        assert!((result - 0.1).abs() < EPS);
    }

    #[test]
    fn test_linear_infinite_input() {
        assert_eq!(scale_linear(f64::INFINITY, 1.0), 1.0);
        assert_eq!(scale_linear(f64::NEG_INFINITY, 0.25), -0.25);
    }

    // ==================== Squared Tests ====================

    #[test]
    fn test_squared_full_deflection_no_deadband() {
        assert_eq!(scale_squared(1.0, 1.0, 0.0), 1.0);
        assert_eq!(scale_squared(-1.0, 1.0, 0.0), -1.0);
    }

    #[test]
    fn test_squared_full_deflection_with_deadband() {
        // Squared and deadband portions still sum to full scale
        assert!((scale_squared(1.0, 1.0, 0.2) - 1.0).abs() < EPS);
        assert!((scale_squared(-1.0, 1.0, 0.2) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_squared_half_stick_with_deadband() {
        assert!((scale_squared(0.5, 1.0, 0.2) - 0.4).abs() < EPS);
        assert!((scale_squared(-0.5, 1.0, 0.2) + 0.4).abs() < EPS);
    }

    #[test]
    fn test_squared_below_threshold_skips_deadband() {
        let result = scale_squared(0.005, 1.0, 0.2);
        assert!((result - 0.000025).abs() < EPS);
    }

    #[test]
    fn test_squared_at_threshold_adds_deadband() {
        let result = scale_squared(0.01, 1.0, 0.2);
        assert!((result - (0.0001 * 0.8 + 0.2)).abs() < EPS);
    }

    #[test]
    fn test_squared_zero_is_exactly_zero() {
        for deadband in [0.0, 0.15, 0.5, 0.99] {
            assert_eq!(scale_squared(0.0, 1.0, deadband), 0.0);
            assert_eq!(scale_squared(-0.0, 1.0, deadband), 0.0);
        }
    }

    #[test]
    fn test_squared_applies_reduction_last() {
        let full = scale_squared(0.5, 1.0, 0.2);
        let quarter = scale_squared(0.5, 0.25, 0.2);
        assert!((quarter - full * 0.25).abs() < EPS);
    }

    #[test]
    fn test_squared_is_odd_symmetric() {
        for input in [0.003, 0.01, 0.2, 0.5, 0.77, 1.0, 2.5] {
            let pos = scale_squared(input, 0.8, 0.15);
            let neg = scale_squared(-input, 0.8, 0.15);
            assert_eq!(pos, -neg, "asymmetric at {}", input);
        }
    }

    #[test]
    fn test_squared_is_monotonic() {
        let mut previous = scale_squared(-1.0, 1.0, 0.15);
        for step in -99..=100 {
            let current = scale_squared(step as f64 / 100.0, 1.0, 0.15);
            assert!(current >= previous, "not monotonic at step {}", step);
            previous = current;
        }
    }

    #[test]
    fn test_curve_default_is_squared() {
        assert_eq!(ResponseCurve::default(), ResponseCurve::Squared);
    }

    #[test]
    fn test_curve_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            curve: ResponseCurve,
            sign: SignPolicy,
        }

        let parsed: Wrapper = toml::from_str("curve = \"linear\"\nsign = \"inverted\"").unwrap();
        assert_eq!(parsed.curve, ResponseCurve::Linear);
        assert_eq!(parsed.sign, SignPolicy::Inverted);
    }
}
