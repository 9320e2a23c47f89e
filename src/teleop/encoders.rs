//! # Encoder Direction Debugging
//!
//! Checks dead-wheel encoder wiring and direction by pushing the robot by
//! hand.
//!
//! 1. Capture a baseline while the robot sits still.
//! 2. Push the robot forward. Left and right counts should increase.
//! 3. Push the robot left. The lateral count should increase.
//!
//! An encoder whose count went the wrong way needs its direction reversed in
//! the localizer; one that barely moved is likely unplugged or mapped to the
//! wrong port.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw counts from the three dead-wheel encoders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EncoderReading {
    pub left: f64,
    pub right: f64,
    pub lateral: f64,
}

/// Counts accumulated since the baseline was captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EncoderDeltas {
    pub left: f64,
    pub right: f64,
    pub lateral: f64,
}

/// Which dead wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    Left,
    Right,
    Lateral,
}

/// Direction the robot was pushed during the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushDirection {
    Forward,
    Left,
}

/// What went wrong with an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Count moved the wrong way.
    Reversed,
    /// Count did not move enough to tell.
    NoMovement,
}

/// An encoder that failed a direction check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderFault {
    pub encoder: Encoder,
    pub kind: FaultKind,
}

impl fmt::Display for EncoderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.encoder {
            Encoder::Left => "left",
            Encoder::Right => "right",
            Encoder::Lateral => "lateral",
        };
        match self.kind {
            FaultKind::Reversed => write!(f, "{} encoder counts backwards, reverse it", name),
            FaultKind::NoMovement => write!(f, "{} encoder did not move, check wiring", name),
        }
    }
}

/// Encoder counts at the start of a check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderBaseline {
    initial: EncoderReading,
}

impl EncoderBaseline {
    /// Records `reading` as the zero point.
    #[must_use]
    pub fn capture(reading: EncoderReading) -> Self {
        Self { initial: reading }
    }

    /// Counts accumulated since the baseline.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::teleop::encoders::{EncoderBaseline, EncoderReading};
    ///
    /// let baseline = EncoderBaseline::capture(EncoderReading { left: 100.0, right: 50.0, lateral: 0.0 });
    /// let deltas = baseline.deltas(EncoderReading { left: 160.0, right: 110.0, lateral: -2.0 });
    /// assert_eq!(deltas.left, 60.0);
    /// assert_eq!(deltas.lateral, -2.0);
    /// ```
    #[must_use]
    pub fn deltas(&self, reading: EncoderReading) -> EncoderDeltas {
        EncoderDeltas {
            left: reading.left - self.initial.left,
            right: reading.right - self.initial.right,
            lateral: reading.lateral - self.initial.lateral,
        }
    }
}

impl EncoderDeltas {
    /// Checks the encoders a push in `push` direction should have moved.
    ///
    /// Counts with magnitude under `min_counts` are reported as
    /// [`FaultKind::NoMovement`]. An empty result means the wiring checks out.
    #[must_use]
    pub fn check(&self, push: PushDirection, min_counts: f64) -> Vec<EncoderFault> {
        let expected = match push {
            PushDirection::Forward => vec![(Encoder::Left, self.left), (Encoder::Right, self.right)],
            PushDirection::Left => vec![(Encoder::Lateral, self.lateral)],
        };

        expected
            .into_iter()
            .filter_map(|(encoder, delta)| {
                let kind = if delta.abs() < min_counts {
                    FaultKind::NoMovement
                } else if delta < 0.0 {
                    FaultKind::Reversed
                } else {
                    return None;
                };
                Some(EncoderFault { encoder, kind })
            })
            .collect()
    }
}
