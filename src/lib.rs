//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming language.
//! Source text is tokenized, parsed into a syntax tree by an
//! operator-precedence parser, and evaluated directly from that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::{
    ast::Program,
    error::{Error, ParseErrors},
    interpreter::{evaluator::core::Evaluator, parser::core::parse, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the program, statement and expression types built by
/// the parser and read by the evaluator, together with their canonical
/// parenthesized text form.
pub mod ast;
/// Shell configuration.
pub mod config;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the syntax diagnostics collected by the parser.
/// - Defines the faults that stop evaluation.
/// - Combines both into the error of the full pipeline.
pub mod error;
/// Ties together lexing, parsing, evaluation and the value model.
pub mod interpreter;
/// The interactive shell.
///
/// Reads lines with `rustyline`, evaluates them against one persistent
/// [`Evaluator`], and prints values or diagnostics.
pub mod repl;

/// Evaluates `source` in a fresh evaluator and returns its value.
///
/// # Errors
/// Returns [`Error::Parse`] with every diagnostic if the source does not
/// parse (nothing is evaluated in that case), or [`Error::Runtime`] if
/// evaluation fails.
///
/// # Examples
/// ```
/// use monkey::{interpret, interpreter::value::Value};
///
/// assert_eq!(interpret("5 + 5 * 2").unwrap(), Value::Integer(15));
/// assert_eq!(interpret("if (false) { 10 }").unwrap(), Value::Null);
///
/// // Syntax errors suppress evaluation.
/// assert!(interpret("let = 5;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, Error> {
    interpret_with(&mut Evaluator::new(), source)
}

/// Evaluates `source` with an existing evaluator, so bindings made by
/// earlier calls stay visible.
///
/// # Errors
/// Same as [`interpret`].
///
/// # Examples
/// ```
/// use monkey::{interpret_with, interpreter::{evaluator::core::Evaluator, value::Value}};
///
/// let mut evaluator = Evaluator::new();
/// interpret_with(&mut evaluator, "let x = 20;").unwrap();
///
/// assert_eq!(interpret_with(&mut evaluator, "x / 4").unwrap(), Value::Integer(5));
/// ```
pub fn interpret_with(evaluator: &mut Evaluator, source: &str) -> Result<Value, Error> {
    let program = parse_program(source)?;
    Ok(evaluator.eval_program(&program)?)
}

/// Parses `source` into a program that is safe to evaluate.
///
/// # Errors
/// Returns every diagnostic if the source does not parse.
///
/// # Examples
/// ```
/// use monkey::parse_program;
///
/// assert_eq!(parse_program("1 + 2 * 3").unwrap().to_string(), "(1 + (2 * 3))");
/// assert_eq!(parse_program("let = 5; let y 7;").unwrap_err().len(), 2);
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseErrors> {
    let (program, errors) = parse(source);
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}
