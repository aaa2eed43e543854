/// Parsing errors.
///
/// Defines the diagnostics recorded while turning a token stream into a
/// syntax tree. Parse errors never stop the parser; they are collected in
/// source order and handed back next to the (partial) tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the faults that stop evaluation, namely division by zero and
/// integer overflow. Type mismatches are not errors: they evaluate to `null`.
pub mod runtime_error;

use thiserror::Error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;

/// Any failure of the full source-to-value pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source did not parse; no evaluation was attempted.
    #[error("{0}")]
    Parse(#[from] ParseErrors),
    /// Evaluation stopped on a runtime fault.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
