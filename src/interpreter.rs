/// The evaluator module computes values from syntax trees.
///
/// The evaluator walks the tree produced by the parser, applies the operator
/// semantics and truthiness rules, and keeps the `let` bindings of a session.
///
/// # Responsibilities
/// - Evaluates programs, blocks, statements and expressions.
/// - Maps ill-typed operations to `null`.
/// - Reports arithmetic faults such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads raw source text and produces tokens one at a time, each
/// carrying its kind and literal text. After the input is exhausted it keeps
/// producing end-of-input tokens.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// Statements are parsed by recursive descent and expressions by precedence
/// climbing. Syntax errors are collected rather than returned early.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast`] nodes.
/// - Resolves operator precedence and associativity.
/// - Records one diagnostic per malformed statement and keeps going.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Integers, booleans and `null`, plus the truthiness rule used by
/// conditionals and `!`.
pub mod value;
