use crate::{
    ast::{BlockStatement, Identifier, Statement},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{core::Parser, precedence::Precedence},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses the statement starting at the current token.
    ///
    /// Dispatches on the current token:
    /// - `let` starts a [`Statement::Let`],
    /// - `return` starts a [`Statement::Return`],
    /// - anything else is parsed as an expression statement.
    ///
    /// On failure `None` is returned with the diagnostic already recorded.
    /// The caller skips the rest of the statement with
    /// [`Parser::synchronize`].
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>`, with an optional `;`.
    ///
    /// Grammar: `let := "let" IDENT "=" expression ";"?`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.cur.literal.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expression>`, with an optional `;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let literal = self.cur.literal.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression { literal,
                                     expression })
    }

    /// Parses statements up to the matching `}`.
    ///
    /// Must be called with the opening `{` as the current token. Leaves the
    /// closing `}` as the current token. Reaching the end of input first is
    /// reported as a missing `}`.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(super) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        self.depth += 1;
        let block = self.parse_block_body();
        self.depth -= 1;
        block
    }

    fn parse_block_body(&mut self) -> Option<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) {
            if self.cur_is(TokenKind::Eof) {
                self.expected_error(TokenKind::RBrace, TokenKind::Eof);
                return None;
            }
            match self.parse_statement() {
                Some(statement) => block.statements.push(statement),
                None if self.synchronize() => break,
                None => {},
            }
            self.next_token();
        }

        self.close_block();
        Some(block)
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
