//! Planar primitives in canvas (unzoomed pixel) space.

use std::f64::consts::FRAC_PI_6;

use crate::core::error::GradingError;

pub const ARROW_HEAD_LENGTH: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Direction from `start` to `end` in radians, measured from the positive x
/// axis, in (-pi, pi]. Coincident points yield 0.
pub fn angle(start: Point, end: Point) -> f64 {
    (end.y - start.y).atan2(end.x - start.x)
}

/// Tip followed by the two barbs of an arrow pointing along `angle_rad`.
pub fn arrow_head(angle_rad: f64, tip: Point) -> [Point; 3] {
    let barb = |offset: f64| {
        Point::new(
            tip.x - ARROW_HEAD_LENGTH * (angle_rad + offset).cos(),
            tip.y - ARROW_HEAD_LENGTH * (angle_rad + offset).sin(),
        )
    };
    [tip, barb(-FRAC_PI_6), barb(FRAC_PI_6)]
}

/// Nearest candidate to `target`. Ties go to the earliest candidate.
pub fn closest_point(points: &[Point], target: Point) -> Result<Point, GradingError> {
    let (first, rest) = points
        .split_first()
        .ok_or(GradingError::InvalidArgument(
            "closest_point needs at least one candidate",
        ))?;

    let mut best = *first;
    let mut best_distance = distance(best, target);
    for candidate in rest.iter().copied() {
        let d = distance(candidate, target);
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::{Point, angle, arrow_head, closest_point, distance};
    use crate::core::GradingError;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn distance_is_zero_for_same_point_and_symmetric() {
        let a = Point::new(3.5, -2.0);
        let b = Point::new(-1.0, 7.25);

        assert_eq!(distance(a, a), 0.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert_relative_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn reversed_angle_differs_by_pi() {
        let pairs = [
            (Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            (Point::new(1.0, 2.0), Point::new(4.0, -3.0)),
            (Point::new(-5.0, 8.0), Point::new(-5.0, 1.0)),
            (Point::new(12.0, 0.5), Point::new(-7.0, 9.0)),
        ];
        for (a, b) in pairs {
            let diff = (angle(a, b) - angle(b, a)).rem_euclid(TAU);
            assert_relative_eq!(diff, PI, epsilon = 1e-12);
        }
    }

    #[test]
    fn angle_follows_screen_axes() {
        let origin = Point::new(0.0, 0.0);
        assert_relative_eq!(angle(origin, Point::new(5.0, 0.0)), 0.0);
        assert_relative_eq!(angle(origin, Point::new(0.0, 5.0)), PI / 2.0);
        assert_relative_eq!(angle(origin, Point::new(-5.0, 0.0)), PI);
        assert_relative_eq!(angle(origin, Point::new(0.0, -5.0)), -PI / 2.0);
    }

    #[test]
    fn coincident_points_have_zero_angle() {
        let p = Point::new(42.0, 17.0);
        assert_eq!(angle(p, p), 0.0);
    }

    #[test]
    fn arrow_head_barbs_trail_the_tip() {
        let tip = Point::new(100.0, 0.0);
        let [head, left, right] = arrow_head(0.0, tip);

        assert_eq!(head, tip);
        assert_relative_eq!(left.x, 100.0 - 10.0 * (PI / 6.0).cos(), epsilon = 1e-9);
        assert_relative_eq!(left.y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(right.x, left.x, epsilon = 1e-9);
        assert_relative_eq!(right.y, -5.0, epsilon = 1e-9);
        assert_relative_eq!(distance(tip, left), 10.0, epsilon = 1e-9);
        assert_relative_eq!(distance(tip, right), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn closest_point_prefers_first_on_ties() {
        let candidates = [
            Point::new(10.0, 0.0),
            Point::new(-10.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(0.0, -3.0),
        ];
        let found = closest_point(&candidates, Point::new(0.0, 0.0)).expect("non-empty");
        assert_eq!(found, Point::new(0.0, 3.0));

        let found = closest_point(&candidates, Point::new(9.0, 1.0)).expect("non-empty");
        assert_eq!(found, Point::new(10.0, 0.0));
    }

    #[test]
    fn closest_point_rejects_empty_candidates() {
        let err = closest_point(&[], Point::new(1.0, 1.0)).expect_err("empty input");
        assert!(matches!(err, GradingError::InvalidArgument(_)));
    }
}
