use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("no pending height request with id {0}")]
    UnknownRequest(usize),

    #[error("cannot estimate height: {0}")]
    MissingInput(&'static str),
}
