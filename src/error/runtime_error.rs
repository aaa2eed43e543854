use thiserror::Error;

/// Represents the faults that stop evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted integer division by zero.
    #[error("division by zero: {left} / 0")]
    DivisionByZero {
        /// The dividend.
        left: i64,
    },
    /// An integer operation left the `i64` range.
    #[error("integer overflow in '{operator}' operation")]
    Overflow {
        /// The operator symbol.
        operator: String,
    },
}
