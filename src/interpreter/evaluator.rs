/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], program, block and statement evaluation,
/// and the unwinding used by `return`.
pub mod core;

/// Name bindings.
///
/// Stores the values bound by `let` so later statements, and later shell
/// lines, can refer to them.
pub mod environment;

/// Prefix operator evaluation.
///
/// Implements `!` (negation by truthiness) and `-` (integer negation).
pub mod unary;

/// Infix operator evaluation.
///
/// Arithmetic and comparisons on integers, equality on booleans, and the
/// `null` fallback for every other combination.
pub mod binary;
