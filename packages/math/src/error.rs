use thiserror::Error;

/// Errors returned by the numeric routines in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An input violated a precondition (for example a zero step).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// The exact result does not fit in the result type.
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl MathError {
    pub(crate) fn zero(name: &'static str) -> Self {
        MathError::InvalidArgument {
            name,
            reason: "must be positive",
        }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        MathError::Overflow { operation }
    }
}
