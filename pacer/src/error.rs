use thiserror::Error;

/// Why a run published nothing.
///
/// None of these ever reach the caller of
/// [`ThroughputCalculator::compute_and_publish`](crate::ThroughputCalculator::compute_and_publish);
/// they are logged and the sink is left as it was.
#[derive(Debug, Error)]
pub enum Skip {
    #[error("Target TPS must be positive, got {0}")]
    InvalidTarget(f64),

    #[error("Computation failed: {0}")]
    Computation(#[from] ComputationError),

    #[error("Publication failed: {0}")]
    Publish(#[from] SinkError),
}

impl Skip {
    pub fn reason(&self) -> &'static str {
        match self {
            Skip::InvalidTarget(_) => "invalid_target",
            Skip::Computation(_) => "computation",
            Skip::Publish(_) => "publish",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ComputationError {
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Sink rejected key {key}: {reason}")]
    Rejected { key: String, reason: String },

    #[error("Sink is unavailable: {0}")]
    Unavailable(String),
}
