use clap::Parser;
use grading_calculator::core::calibration::REFERENCE_REAL_DISTANCE;
use grading_calculator::core::estimation::DEFAULT_DESCENT_RATE;
use grading_calculator::core::session::SessionConfig;
use std::path::PathBuf;

/// Estimate terrain heights on a landscape grading diagram.
#[derive(Parser, Debug)]
pub struct Options {
    /// Background diagram to measure on.
    #[arg(short, long, default_value = "test_diagram.jpg")]
    pub image: PathBuf,

    /// Real-world length represented by the first arrow drawn.
    #[arg(long, default_value_t = REFERENCE_REAL_DISTANCE, value_parser = positive_f64)]
    pub reference_distance: f64,

    /// Height drop per 100 projected units. Negative values model uphill.
    #[arg(long, default_value_t = DEFAULT_DESCENT_RATE, allow_negative_numbers = true)]
    pub descent_rate: f64,
}

impl Options {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            reference_distance: self.reference_distance,
            descent_rate: self.descent_rate,
        }
    }
}

fn positive_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} must be positive"))
    }
}
