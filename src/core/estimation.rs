use std::fmt;

use log::debug;

use crate::core::geometry::{self, Point};

pub const DEFAULT_DESCENT_RATE: f64 = 1.0;

/// Projected real-world distance per unit of height drop (a 1-in-100 grade).
pub const GRADE_DIVISOR: f64 = 100.0;

/// Value shown for a height that could not be parsed.
pub const INVALID_HEIGHT_SENTINEL: f64 = -1.0;

/// A user-entered height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Height {
    Valid(f64),
    Invalid,
}

impl Height {
    /// Malformed or non-finite text becomes `Invalid`, never an error.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Valid(value),
            _ => Self::Invalid,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Valid(value) => Some(*value),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn sentinel_value(&self) -> f64 {
        self.value().unwrap_or(INVALID_HEIGHT_SENTINEL)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.sentinel_value();
        if value.fract() == 0.0 {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientInputs {
    pub start: Point,
    pub target: Point,
    pub start_height: f64,
    /// Direction of the calibrated trajectory, in radians.
    pub trajectory_angle: f64,
    pub scale: f64,
    pub descent_rate: f64,
}

/// Every intermediate of a projection, kept for logging and display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientProjection {
    pub distance: f64,
    pub bearing: f64,
    pub projected: f64,
    pub scaled: f64,
    pub drop: f64,
    pub height: f64,
}

/// Projects the start height onto the target along the trajectory direction.
///
/// Only the component of the start-to-target displacement that lies along
/// the trajectory contributes to the drop. A positive descent rate always
/// lowers the height when moving along the arrow; there is no lower bound.
pub fn project_gradient(inputs: GradientInputs) -> GradientProjection {
    let distance = geometry::distance(inputs.start, inputs.target);
    let bearing = geometry::angle(inputs.start, inputs.target);
    let projected = distance * (bearing - inputs.trajectory_angle).cos();
    let scaled = projected * inputs.scale;
    let drop = scaled / GRADE_DIVISOR * inputs.descent_rate;
    let height = inputs.start_height - drop;

    debug!(
        "distance {distance:.3} projected {projected:.3} scaled {scaled:.3} drop {drop:.4} height {height:.4}"
    );

    GradientProjection {
        distance,
        bearing,
        projected,
        scaled,
        drop,
        height,
    }
}

pub fn estimate_height(
    start: Point,
    target: Point,
    start_height: f64,
    trajectory_angle: f64,
    scale: f64,
    descent_rate: f64,
) -> f64 {
    project_gradient(GradientInputs {
        start,
        target,
        start_height,
        trajectory_angle,
        scale,
        descent_rate,
    })
    .height
}
