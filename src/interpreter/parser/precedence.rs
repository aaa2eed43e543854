use crate::interpreter::lexer::TokenKind;

/// Binding strength of an operator, from loosest to tightest.
///
/// The derived ordering follows declaration order, so `Sum < Product` and
/// so on. `Call` is the level of a `(` that follows an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything binds tighter than this. Used to start a full expression.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `-x`, `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// The precedence a token has when it appears in infix position.
    ///
    /// Tokens that cannot continue an expression map to `Lowest`, which ends
    /// the precedence-climbing loop.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::{lexer::TokenKind, parser::precedence::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}
