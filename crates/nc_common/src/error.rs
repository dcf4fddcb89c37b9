use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// The entropy source required by the `random-device` build is unusable.
    EntropyUnavailable(String),
    /// A physical parameter lies outside the documented bounds,
    /// e.g. `na >= 0.05` failed for `na = 0.01`.
    RangeViolation {
        argument: &'static str,
        relation: &'static str,
        bound: f64,
        value: f64,
    },
    /// More reference nucleotides requested than available.
    OutOfRange { requested: usize, available: usize },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::EntropyUnavailable(s) => {
                write!(f, "Entropy source unavailable: {}", s)
            }
            NumericError::RangeViolation { argument, relation, bound, value } => {
                write!(f, "Requirement failed: {} {} {} (got {} = {})",
                    argument, relation, bound, argument, value)
            }
            NumericError::OutOfRange { requested, available } => {
                write!(f, "Reference sequence has {} nucleotides, requested {}",
                    available, requested)
            }
        }
    }
}

impl std::error::Error for NumericError {}
