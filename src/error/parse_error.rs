use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents a single syntax diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The peek token was not the kind the grammar requires.
    #[error("expected next token to be {expected}, got {found} instead")]
    ExpectedToken {
        /// The kind the parser needed.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
    },
    /// No expression can start with this token.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParse {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal does not fit in an `i64`.
    #[error("could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
    },
}

/// The ordered list of diagnostics produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Returns `true` when the parse produced no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the diagnostics in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }
}

impl From<Vec<ParseError>> for ParseErrors {
    fn from(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type IntoIter = std::slice::Iter<'a, ParseError>;
    type Item = &'a ParseError;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
