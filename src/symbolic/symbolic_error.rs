use crate::symbolic::symbolic_engine::BinaryOperator;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors of the parse -> derive -> render pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    /// the text matches none of the grammar alternatives
    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },
    /// no derivative rule exists for this operator
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(BinaryOperator),
    /// expression nested deeper than the recursion guard allows
    #[error("expression nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

impl DiffError {
    pub fn parse(input: &str, reason: &str) -> DiffError {
        DiffError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
