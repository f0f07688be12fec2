use crate::core::error::GradingError;

/// Real-world length (e.g. feet) represented by the first arrow drawn.
pub const REFERENCE_REAL_DISTANCE: f64 = 10.0;

/// Real-world units per canvas pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Scale {
    #[default]
    Uncalibrated,
    Calibrated(f64),
}

impl Scale {
    pub fn factor(&self) -> Option<f64> {
        match self {
            Self::Uncalibrated => None,
            Self::Calibrated(factor) => Some(*factor),
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self, Self::Calibrated(_))
    }

    /// Establishes the scale from the first trajectory. Once calibrated this
    /// is a no-op that returns the stored factor.
    pub fn calibrate(
        &mut self,
        pixel_length: f64,
        reference_distance: f64,
    ) -> Result<f64, GradingError> {
        if let Self::Calibrated(factor) = self {
            return Ok(*factor);
        }
        let factor = scale_for(pixel_length, reference_distance)?;
        *self = Self::Calibrated(factor);
        Ok(factor)
    }
}

pub fn calibrate_scale(pixel_length: f64) -> Result<f64, GradingError> {
    scale_for(pixel_length, REFERENCE_REAL_DISTANCE)
}

pub fn scale_for(pixel_length: f64, reference_distance: f64) -> Result<f64, GradingError> {
    if !pixel_length.is_finite() || pixel_length <= 0.0 {
        return Err(GradingError::InvalidArgument(
            "calibration arrow must have a positive, finite length",
        ));
    }
    if !reference_distance.is_finite() || reference_distance <= 0.0 {
        return Err(GradingError::InvalidArgument(
            "reference distance must be positive and finite",
        ));
    }
    Ok(reference_distance / pixel_length)
}

#[cfg(test)]
mod tests {
    use super::{REFERENCE_REAL_DISTANCE, Scale, calibrate_scale, scale_for};
    use crate::core::GradingError;
    use approx::assert_relative_eq;

    #[test]
    fn fifty_pixel_arrow_gives_point_two() {
        assert_relative_eq!(calibrate_scale(50.0).expect("valid length"), 0.2);
        assert_relative_eq!(
            calibrate_scale(37.5).expect("valid length"),
            REFERENCE_REAL_DISTANCE / 37.5
        );
    }

    #[test]
    fn custom_reference_distance() {
        assert_relative_eq!(scale_for(200.0, 25.0).expect("valid"), 0.125);
    }

    #[test]
    fn degenerate_lengths_are_rejected() {
        for length in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let err = calibrate_scale(length).expect_err("degenerate length");
            assert!(matches!(err, GradingError::InvalidArgument(_)));
        }
        assert!(scale_for(10.0, 0.0).is_err());
    }

    #[test]
    fn calibrates_only_once() {
        let mut scale = Scale::default();
        assert!(!scale.is_calibrated());
        assert_eq!(scale.factor(), None);

        assert_relative_eq!(scale.calibrate(50.0, 10.0).expect("first"), 0.2);
        assert_relative_eq!(scale.calibrate(400.0, 10.0).expect("second"), 0.2);
        assert_eq!(scale, Scale::Calibrated(0.2));
    }

    #[test]
    fn unit_scale_is_not_mistaken_for_uncalibrated() {
        let mut scale = Scale::default();
        assert_eq!(scale.calibrate(10.0, 10.0).expect("first"), 1.0);
        assert_eq!(scale.calibrate(20.0, 10.0).expect("second"), 1.0);
        assert_eq!(scale.factor(), Some(1.0));
    }

    #[test]
    fn failed_calibration_leaves_scale_unset() {
        let mut scale = Scale::default();
        assert!(scale.calibrate(0.0, 10.0).is_err());
        assert!(!scale.is_calibrated());
        assert_relative_eq!(scale.calibrate(40.0, 10.0).expect("retry"), 0.25);
    }
}
