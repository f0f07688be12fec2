pub mod calibration;
pub mod error;
pub mod estimation;
pub mod geometry;
pub mod gesture;
pub mod session;
pub mod view;

pub use error::GradingError;
