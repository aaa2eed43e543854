use crate::{
    ast::{Expression, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{core::Parser, precedence::Precedence},
    },
};

/// A parse function for a token that starts an expression.
pub(super) type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;

impl<S: TokenSource> Parser<S> {
    /// Looks up the prefix parse function registered for `kind`.
    ///
    /// | token            | parses                        |
    /// |------------------|-------------------------------|
    /// | `IDENT`          | identifier                    |
    /// | `INT`            | integer literal               |
    /// | `TRUE`, `FALSE`  | boolean literal               |
    /// | `!`, `-`         | prefix operation              |
    /// | `(`              | grouped expression            |
    /// | `IF`             | conditional expression        |
    pub(super) fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<S>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean_literal),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            _ => None,
        }
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(self.cur.literal.clone())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        if let Ok(value) = self.cur.literal.parse::<i64>() {
            Some(Expression::IntegerLiteral(value))
        } else {
            self.record(ParseError::InvalidInteger { literal: self.cur.literal.clone() });
            None
        }
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral(self.cur_is(TokenKind::True)))
    }

    /// Parses `-x` or `!x`.
    ///
    /// The operand is parsed at `Prefix` precedence, so `-a * b` groups as
    /// `((-a) * b)` and prefix operators nest: `!-a` is `(!(-a))`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = PrefixOperator::from_token(self.cur.kind)?;
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right) })
    }

    /// Parses `( expression )`. The parentheses leave no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses a conditional expression.
    ///
    /// Grammar:
    /// ```text
    ///     if := "if" "(" expression ")" block ("else" block)?
    /// ```
    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }
}
