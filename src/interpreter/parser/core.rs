use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::Program,
    error::{ParseError, ParseErrors},
    interpreter::{
        lexer::{Lexer, Token, TokenKind, TokenSource},
        parser::precedence::Precedence,
    },
};

/// Parses `source` into a program and the diagnostics found along the way.
///
/// The returned tree is only trustworthy when the diagnostics are empty.
///
/// ## Example
/// ```
/// use monkey::interpreter::parser::core::parse;
///
/// let (program, errors) = parse("(5 + 5) * 2");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((5 + 5) * 2)");
///
/// let (_, errors) = parse("let = 5;");
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, ParseErrors) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// An operator-precedence parser over any [`TokenSource`].
///
/// The parser looks at exactly two tokens: `cur`, the token being parsed, and
/// `peek`, the one after it. Both move forward together through
/// [`Parser::next_token`]; no decision ever looks further ahead or backtracks.
pub struct Parser<S: TokenSource> {
    source:           S,
    pub(super) cur:   Token,
    pub(super) peek:  Token,
    /// Number of blocks currently open.
    pub(super) depth: usize,
    /// Tokens shifted into `cur` so far.
    position:         usize,
    /// Position of the `}` that closed the most recently parsed block.
    block_end:        Option<usize>,
    errors:           Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and fills the lookahead window from `source`.
    pub fn new(mut source: S) -> Self {
        let cur = source.next_token();
        let peek = source.next_token();
        Self { source,
               cur,
               peek,
               depth: 0,
               position: 0,
               block_end: None,
               errors: Vec::new() }
    }

    /// Diagnostics recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> ParseErrors {
        ParseErrors(self.errors)
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that could not be parsed are left out of the program; the
    /// reason is recorded in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => {
                    self.synchronize();
                },
            }
            self.next_token();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");
        program
    }

    /// Shifts the lookahead window by one token.
    pub(super) fn next_token(&mut self) {
        let next = self.source.next_token();
        self.cur = mem::replace(&mut self.peek, next);
        self.position += 1;
        trace!(cur = %self.cur.kind, peek = %self.peek.kind, "advance");
    }

    /// Marks the current `}` as the end of a block that was fully parsed.
    pub(super) fn close_block(&mut self) {
        self.block_end = Some(self.position);
    }

    pub(super) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances only if the peek token has the expected kind. Otherwise
    /// records a diagnostic and leaves the window untouched.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.expected_error(kind, self.peek.kind);
            false
        }
    }

    pub(super) fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(super) fn expected_error(&mut self, expected: TokenKind, found: TokenKind) {
        self.record(ParseError::ExpectedToken { expected, found });
    }

    pub(super) fn record(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    /// Skips the rest of an abandoned statement.
    ///
    /// Braces opened inside the skipped tokens are matched. Stops on the
    /// terminating `;`, just before the `}` closing the enclosing block, or
    /// just before the end of input, so the caller's usual `next_token`
    /// lands on whatever follows the statement.
    ///
    /// Returns `true` when the statement already ended on the `}` closing
    /// the enclosing block. That brace is left as the current token and the
    /// caller must not step over it. A `}` that closed a block parsed inside
    /// the statement itself does not count.
    pub(super) fn synchronize(&mut self) -> bool {
        let mut nesting = 0_usize;
        loop {
            match self.cur.kind {
                TokenKind::Eof => return false,
                TokenKind::RBrace
                    if nesting == 0 && self.depth > 0 && self.block_end != Some(self.position) =>
                {
                    return true;
                },
                TokenKind::LBrace => nesting += 1,
                TokenKind::RBrace => nesting = nesting.saturating_sub(1),
                TokenKind::Semicolon if nesting == 0 => return false,
                _ => {},
            }
            if self.peek_is(TokenKind::Eof)
               || (nesting == 0 && self.depth > 0 && self.peek_is(TokenKind::RBrace))
            {
                return false;
            }
            self.next_token();
        }
    }
}
