//! # Field Geometry
//!
//! Distance and bearing from the robot to the tower goal.
//!
//! Coordinates are field inches with the origin at the field center;
//! headings and bearings are radians, counter-clockwise positive.
//!
//! # Types
//!
//! - `FieldPoint`: A 2D point on the field.
//! - `Pose`: A field point plus heading.
//! - `GoalField`: The goal position and heights.

use serde::{Deserialize, Serialize};

/// Default tower goal position (inches).
pub const TOWER_GOAL: FieldPoint = FieldPoint { x: 72.25, y: -12.39 };

/// High goal height (inches).
pub const TOWER_GOAL_HIGH_HEIGHT: f64 = 35.26;
/// Mid goal height (inches).
pub const TOWER_GOAL_MID_HEIGHT: f64 = 26.5;
/// Low goal height (inches).
pub const TOWER_GOAL_LOW_HEIGHT: f64 = 16.5;

/// A 2D point on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPoint {
    /// The x-coordinate in inches.
    pub x: f64,
    /// The y-coordinate in inches.
    pub y: f64,
}

impl FieldPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::field::FieldPoint;
    ///
    /// let d = FieldPoint::new(0.0, 0.0).distance_to(FieldPoint::new(3.0, 4.0));
    /// assert!((d - 5.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: FieldPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Direction of the vector from `from` to `self`, in -π..=π.
    #[must_use]
    pub fn bearing_from(self, from: FieldPoint) -> f64 {
        (self.y - from.y).atan2(self.x - from.x)
    }
}

/// Robot position and heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position in inches.
    pub x: f64,
    /// Y position in inches.
    pub y: f64,
    /// Heading in radians.
    #[serde(default)]
    pub heading: f64,
}

impl Pose {
    #[must_use]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Component-wise sum, e.g. robot pose plus a shooter mounting offset.
    #[must_use]
    pub fn plus(self, other: Pose) -> Pose {
        Pose {
            x: self.x + other.x,
            y: self.y + other.y,
            heading: self.heading + other.heading,
        }
    }

    /// The position part of the pose.
    #[must_use]
    pub fn position(self) -> FieldPoint {
        FieldPoint::new(self.x, self.y)
    }
}

/// Goal location on the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalField {
    goal: FieldPoint,
}

impl Default for GoalField {
    fn default() -> Self {
        Self { goal: TOWER_GOAL }
    }
}

impl GoalField {
    /// Creates a field with the goal at `goal`.
    #[must_use]
    pub fn new(goal: FieldPoint) -> Self {
        Self { goal }
    }

    #[must_use]
    pub fn goal(&self) -> FieldPoint {
        self.goal
    }

    /// Distance from the pose's position to the goal, in inches.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_shaper::field::{FieldPoint, GoalField, Pose};
    ///
    /// let field = GoalField::new(FieldPoint::new(10.0, 0.0));
    /// assert!((field.distance_to_goal(Pose::new(4.0, 0.0, 1.0)) - 6.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn distance_to_goal(&self, pose: Pose) -> f64 {
        self.goal.distance_to(pose.position())
    }

    /// Field bearing from the pose's position to the goal, in radians.
    ///
    /// Independent of the robot heading; subtract the heading to get the
    /// turn the robot would need.
    #[must_use]
    pub fn angle_to_goal(&self, pose: Pose) -> f64 {
        self.goal.bearing_from(pose.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_goal() {
        let field = GoalField::default();
        assert_eq!(field.goal(), FieldPoint::new(72.25, -12.39));
    }

    #[test]
    fn test_goal_heights_ordered() {
        assert!(TOWER_GOAL_HIGH_HEIGHT > TOWER_GOAL_MID_HEIGHT);
        assert!(TOWER_GOAL_MID_HEIGHT > TOWER_GOAL_LOW_HEIGHT);
    }

    #[test]
    fn test_distance_from_origin() {
        let field = GoalField::default();
        let expected = (72.25f64 * 72.25 + 12.39 * 12.39).sqrt();
        assert!((field.distance_to_goal(Pose::default()) - expected).abs() < EPS);
    }

    #[test]
    fn test_distance_ignores_heading() {
        let field = GoalField::default();
        let a = field.distance_to_goal(Pose::new(10.0, 5.0, 0.0));
        let b = field.distance_to_goal(Pose::new(10.0, 5.0, 2.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distance_at_goal_is_zero() {
        let field = GoalField::default();
        assert_eq!(field.distance_to_goal(Pose::new(72.25, -12.39, 0.0)), 0.0);
    }

    #[test]
    fn test_angle_from_origin_matches_slope() {
        let field = GoalField::default();
        let expected = (-12.39f64 / 72.25).atan();
        assert!((field.angle_to_goal(Pose::default()) - expected).abs() < EPS);
    }

    #[test]
    fn test_angle_quadrants() {
        let field = GoalField::new(FieldPoint::new(0.0, 0.0));

        // Goal straight ahead along +x
        assert!((field.angle_to_goal(Pose::new(-10.0, 0.0, 0.0))).abs() < EPS);
        // Goal behind along -x
        assert!((field.angle_to_goal(Pose::new(10.0, 0.0, 0.0)).abs() - PI).abs() < EPS);
        // Goal directly above
        assert!((field.angle_to_goal(Pose::new(0.0, -10.0, 0.0)) - FRAC_PI_2).abs() < EPS);
        // Goal up and to the left
        let angle = field.angle_to_goal(Pose::new(10.0, -10.0, 0.0));
        assert!((angle - 3.0 * FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn test_pose_plus_offset() {
        let pose = Pose::new(10.0, 20.0, 0.5).plus(Pose::new(-2.0, 3.0, 0.0));
        assert_eq!(pose, Pose::new(8.0, 23.0, 0.5));
    }

    #[test]
    fn test_pose_deserialize_without_heading() {
        let pose: Pose = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(pose, Pose::new(1.5, -2.0, 0.0));
    }
}
