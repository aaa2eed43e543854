use crate::{
    ast::{Expression, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{core::Parser, precedence::Precedence},
    },
};

/// A parse function for a token that continues an expression, given the
/// already parsed left operand.
pub(super) type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

impl<S: TokenSource> Parser<S> {
    /// Looks up the infix parse function registered for `kind`.
    ///
    /// Every binary operator shares [`Parser::parse_infix_expression`]. A `(`
    /// has `Call` precedence but no infix function, which ends the
    /// expression in front of it.
    pub(super) fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<S>> {
        InfixOperator::from_token(kind).map(|_| Self::parse_infix_expression as InfixParseFn<S>)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix function of the current token produces the left operand.
    /// While the peek token is an infix operator with a higher precedence,
    /// the window advances onto it and its infix function folds the left
    /// operand into a bigger expression. A `;` always ends the loop.
    ///
    /// Because the right operand of an operator is parsed at that operator's
    /// own precedence, operators of equal precedence associate to the left:
    /// `a - b - c` is `((a - b) - c)`.
    ///
    /// When the current token cannot start an expression a
    /// [`ParseError::NoPrefixParse`] is recorded and `None` returned.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = Self::prefix_parse_fn(self.cur.kind) else {
            self.record(ParseError::NoPrefixParse { kind: self.cur.kind });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = InfixOperator::from_token(self.cur.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }
}
