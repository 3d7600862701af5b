use thiserror::Error;

/// Errors raised at the boundary where landmark-source input enters the
/// engine. Classification itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    #[error("invalid landmark set: expected {expected} landmarks, got {actual}")]
    InvalidLandmarkSet { expected: usize, actual: usize },

    #[error("unknown handedness: {0:?}")]
    UnknownHandedness(String),

    #[error("client id is required")]
    MissingClientId,
}
