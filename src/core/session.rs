//! Measurement session: everything the user has marked on the canvas.
//!
//! Estimation deliberately reads only the first confirmed given point, the
//! first trajectory and the first result point, however many more have been
//! added since.

use log::{debug, info, warn};

use crate::core::calibration::{REFERENCE_REAL_DISTANCE, Scale};
use crate::core::error::GradingError;
use crate::core::estimation::{DEFAULT_DESCENT_RATE, GradientInputs, Height, project_gradient};
use crate::core::geometry::{self, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Real-world length of the first arrow drawn.
    pub reference_distance: f64,
    pub descent_rate: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reference_distance: REFERENCE_REAL_DISTANCE,
            descent_rate: DEFAULT_DESCENT_RATE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GivenPoint {
    pub position: Point,
    pub height: Height,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Estimate {
    #[default]
    Pending,
    Estimated(f64),
    /// The reference height could not be parsed.
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultPoint {
    pub position: Point,
    pub estimate: Estimate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    pub start: Point,
    pub end: Point,
    pub angle: f64,
}

impl Trajectory {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            angle: geometry::angle(start, end),
        }
    }

    pub fn pixel_length(&self) -> f64 {
        geometry::distance(self.start, self.end)
    }

    pub fn head(&self) -> [Point; 3] {
        geometry::arrow_head(self.angle, self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(usize);

impl RequestId {
    pub fn value(self) -> usize {
        self.0
    }
}

/// A point waiting for the user to submit its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightRequest {
    pub id: RequestId,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryOutcome {
    pub trajectory: Trajectory,
    /// Set when this trajectory established the session scale.
    pub calibrated: Option<f64>,
    /// Set when a result point existed and was recomputed.
    pub recomputed: Option<Result<Estimate, GradingError>>,
}

#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    pending: Vec<HeightRequest>,
    next_request: usize,
    given: Vec<GivenPoint>,
    results: Vec<ResultPoint>,
    trajectories: Vec<Trajectory>,
    scale: Scale,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn pending_requests(&self) -> &[HeightRequest] {
        &self.pending
    }

    pub fn given_points(&self) -> &[GivenPoint] {
        &self.given
    }

    pub fn result_points(&self) -> &[ResultPoint] {
        &self.results
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn request_height(&mut self, position: Point) -> HeightRequest {
        let request = HeightRequest {
            id: RequestId(self.next_request),
            position,
        };
        self.next_request += 1;
        self.pending.push(request);
        debug!("height requested for ({:.1}, {:.1})", position.x, position.y);
        request
    }

    /// Resolves a pending request. Unparseable text is recorded as an
    /// invalid height rather than rejected.
    pub fn submit_height(&mut self, id: RequestId, text: &str) -> Result<Height, GradingError> {
        let idx = self
            .pending
            .iter()
            .position(|request| request.id == id)
            .ok_or(GradingError::UnknownRequest(id.value()))?;
        let request = self.pending.remove(idx);

        let height = Height::parse(text);
        match height {
            Height::Valid(value) => info!(
                "given height {value} at ({:.1}, {:.1})",
                request.position.x, request.position.y
            ),
            Height::Invalid => warn!("'{}' is not a height; point marked invalid", text.trim()),
        }
        self.given.push(GivenPoint {
            position: request.position,
            height,
        });
        Ok(height)
    }

    pub fn add_result_point(&mut self, position: Point) -> usize {
        self.results.push(ResultPoint {
            position,
            estimate: Estimate::Pending,
        });
        self.results.len() - 1
    }

    /// Records an arrow, calibrating the scale if this is the first one kept.
    /// Zero-length arrows, or arrows that fail calibration, are not recorded.
    pub fn add_trajectory(
        &mut self,
        start: Point,
        end: Point,
    ) -> Result<TrajectoryOutcome, GradingError> {
        let trajectory = Trajectory::new(start, end);
        let pixel_length = trajectory.pixel_length();
        if !pixel_length.is_finite() || pixel_length <= 0.0 {
            warn!("ignoring zero-length arrow at ({:.1}, {:.1})", start.x, start.y);
            return Err(GradingError::InvalidArgument(
                "arrow must have a positive, finite length",
            ));
        }

        let calibrated = if self.scale.is_calibrated() {
            None
        } else {
            let factor = self
                .scale
                .calibrate(pixel_length, self.config.reference_distance)
                .inspect_err(|err| warn!("{err}"))?;
            info!("scale set to {factor:.5} units per pixel");
            Some(factor)
        };

        self.trajectories.push(trajectory);

        let recomputed = if self.results.is_empty() {
            None
        } else {
            Some(self.recompute())
        };

        Ok(TrajectoryOutcome {
            trajectory,
            calibrated,
            recomputed,
        })
    }

    /// Re-estimates the first result point from the first given point and the
    /// first trajectory.
    pub fn recompute(&mut self) -> Result<Estimate, GradingError> {
        let given = *self
            .given
            .first()
            .ok_or(GradingError::MissingInput("no given point has a height yet"))?;
        let trajectory = *self
            .trajectories
            .first()
            .ok_or(GradingError::MissingInput("no trajectory drawn yet"))?;
        let scale = self
            .scale
            .factor()
            .ok_or(GradingError::MissingInput("scale is not calibrated"))?;
        let result = self
            .results
            .first_mut()
            .ok_or(GradingError::MissingInput("no result point marked yet"))?;

        let estimate = match given.height {
            Height::Valid(start_height) => {
                let projection = project_gradient(GradientInputs {
                    start: given.position,
                    target: result.position,
                    start_height,
                    trajectory_angle: trajectory.angle,
                    scale,
                    descent_rate: self.config.descent_rate,
                });
                Estimate::Estimated(projection.height)
            }
            Height::Invalid => Estimate::Invalid,
        };
        result.estimate = estimate;
        Ok(estimate)
    }
}
