/// Parser context and the program-level entry points.
///
/// Holds the two-token lookahead window, the diagnostics list, and the
/// primitives every parse function is built on.
pub mod core;

/// Operator precedence table.
///
/// Maps infix-capable token kinds to their binding strength.
pub mod precedence;

/// Statement parsing.
///
/// Recursive descent over `let`, `return`, expression statements, and
/// brace-delimited blocks.
pub mod statement;

/// Prefix parse functions.
///
/// Everything that can start an expression: identifiers, literals, prefix
/// operators, grouping, and `if` expressions.
pub mod unary;

/// Precedence climbing.
///
/// The expression loop and the infix parse function for binary operators.
pub mod binary;
