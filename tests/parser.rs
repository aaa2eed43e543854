use std::collections::VecDeque;

use monkey::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{Parser, parse},
    },
};
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}:\n{errors}");
    program
}

fn single_expression(source: &str) -> Expression {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "expected one statement in {source:?}");
    match &program.statements[0] {
        Statement::Expression { expression, .. } => expression.clone(),
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn error_messages(source: &str) -> Vec<String> {
    let (_, errors) = parse(source);
    errors.iter().map(ToString::to_string).collect()
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

fn int(value: i64) -> Expression {
    Expression::IntegerLiteral(value)
}

#[test]
fn let_statements_capture_name_and_value() {
    let program = parse_ok("let x = 5;\nlet y = true;\nlet foobar = y;");

    assert_eq!(program.statements,
               vec![Statement::Let { name:  Identifier::new("x"),
                                     value: int(5), },
                    Statement::Let { name:  Identifier::new("y"),
                                     value: Expression::BooleanLiteral(true), },
                    Statement::Let { name:  Identifier::new("foobar"),
                                     value: ident("y"), },]);
    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "let");
    }
}

#[test]
fn return_statements_capture_value() {
    let program = parse_ok("return 5;\nreturn 5 + 10;\nreturn 9993234;");

    let rendered: Vec<String> = program.statements.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["return 5;", "return (5 + 10);", "return 9993234;"]);
    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "return");
    }
}

#[test]
fn statement_count_matches_terminated_statements() {
    let program = parse_ok("let a = 1; return a; a + 1; if (a) { a };");

    let literals: Vec<&str> = program.statements.iter().map(Statement::token_literal).collect();
    assert_eq!(literals, ["let", "return", "a", "if"]);
}

#[test]
fn trailing_semicolon_is_optional() {
    assert_eq!(parse_ok("let x = 1").statements.len(), 1);
    assert_eq!(parse_ok("5").statements.len(), 1);
    assert_eq!(parse_ok("").statements.len(), 0);
}

#[test]
fn identifier_expression() {
    let program = parse_ok("foobar;");
    assert_eq!(program.statements[0].token_literal(), "foobar");
    assert_eq!(single_expression("foobar;"), ident("foobar"));
}

#[test]
fn literal_expressions() {
    assert_eq!(single_expression("5;"), int(5));
    assert_eq!(single_expression("true;"), Expression::BooleanLiteral(true));
    assert_eq!(single_expression("false"), Expression::BooleanLiteral(false));
}

#[test]
fn prefix_expressions() {
    let cases = [("!5;", PrefixOperator::Bang, int(5)),
                 ("-15;", PrefixOperator::Minus, int(15)),
                 ("!true", PrefixOperator::Bang, Expression::BooleanLiteral(true)),
                 ("-a", PrefixOperator::Minus, ident("a"))];

    for (source, operator, right) in cases {
        assert_eq!(single_expression(source),
                   Expression::Prefix { operator,
                                        right: Box::new(right) },
                   "{source}");
    }
}

#[test]
fn infix_expressions() {
    let cases = [("5 + 5;", InfixOperator::Plus),
                 ("5 - 5;", InfixOperator::Minus),
                 ("5 * 5;", InfixOperator::Asterisk),
                 ("5 / 5;", InfixOperator::Slash),
                 ("5 > 5;", InfixOperator::Gt),
                 ("5 < 5;", InfixOperator::Lt),
                 ("5 == 5;", InfixOperator::Eq),
                 ("5 != 5;", InfixOperator::NotEq)];

    for (source, operator) in cases {
        assert_eq!(single_expression(source),
                   Expression::Infix { left: Box::new(int(5)),
                                       operator,
                                       right: Box::new(int(5)) },
                   "{source}");
    }

    assert_eq!(single_expression("true != false"),
               Expression::Infix { left:     Box::new(Expression::BooleanLiteral(true)),
                                   operator: InfixOperator::NotEq,
                                   right:    Box::new(Expression::BooleanLiteral(false)), });
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c", "(a + (b * c))"),
                 ("a - b - c", "((a - b) - c)"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a * -b", "(a * (-b))"),
                 ("--a", "(-(-a))")];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "{source}");
    }
}

#[test]
fn every_operator_pair_follows_the_table() {
    let operators = ["==", "!=", "<", ">", "+", "-", "*", "/"];
    let rank = |op: &str| match op {
        "==" | "!=" => 1,
        "<" | ">" => 2,
        "+" | "-" => 3,
        _ => 4,
    };

    for op1 in operators {
        for op2 in operators {
            let source = format!("a {op1} b {op2} c");
            let expected = if rank(op2) > rank(op1) {
                format!("(a {op1} (b {op2} c))")
            } else {
                format!("((a {op1} b) {op2} c)")
            };
            assert_eq!(parse_ok(&source).to_string(), expected, "{source}");
        }
    }
}

#[test]
fn if_expression() {
    let program = parse_ok("if (x < y) { x }");
    assert_eq!(program.statements[0].token_literal(), "if");

    let Expression::If { condition,
                         consequence,
                         alternative, } = single_expression("if (x < y) { x }")
    else {
        panic!("expected an if expression");
    };
    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.statements.len(), 1);
    assert_eq!(consequence.to_string(), "x");
    assert!(alternative.is_none());
}

#[test]
fn if_else_expression() {
    let Expression::If { consequence,
                         alternative, .. } = single_expression("if (x > y) { x } else { y; }")
    else {
        panic!("expected an if expression");
    };
    assert_eq!(consequence.to_string(), "x");
    assert_eq!(alternative.map(|b| b.to_string()), Some("y".to_string()));

    assert_eq!(parse_ok("if (x > y) { x } else { y }").to_string(), "if(x > y) xelse y");
}

#[test]
fn blocks_hold_several_statements() {
    let program = parse_ok("if (true) { let a = 1; let b = 2; a + b }");
    assert_eq!(program.to_string(), "iftrue let a = 1;let b = 2;(a + b)");
}

#[test]
fn let_missing_identifier_reports_once() {
    let (program, errors) = parse("let = 5;");

    assert!(program.statements.is_empty());
    assert_eq!(errors.iter().cloned().collect::<Vec<_>>(),
               [ParseError::ExpectedToken { expected: TokenKind::Ident,
                                            found:    TokenKind::Assign, }]);
    assert_eq!(errors.to_string(), "expected next token to be IDENT, got = instead");
}

#[test]
fn let_missing_assign_reports_once() {
    assert_eq!(error_messages("let x 5;"), ["expected next token to be =, got INT instead"]);
}

#[test]
fn each_malformed_let_reports_one_error() {
    assert_eq!(error_messages("let x 5;\nlet = 10;\nlet 838383;"),
               ["expected next token to be =, got INT instead",
                "expected next token to be IDENT, got = instead",
                "expected next token to be IDENT, got INT instead"]);
}

#[test]
fn parsing_resumes_after_a_bad_statement() {
    let (program, errors) = parse("let = 5; let y = 7; y");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 7;y");
}

#[test]
fn bad_statement_inside_block_keeps_the_block() {
    let (program, errors) = parse("if (true) { let = 1; 5 }");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "iftrue 5");
}

#[test]
fn statement_cut_short_by_closing_brace_ends_the_block() {
    for source in ["if (true) { 1 + } 5", "if (true) { let x = } 5"] {
        let (program, errors) = parse(source);

        assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
                   ["no prefix parse function for } found"],
                   "{source:?}");
        assert_eq!(program.statements.len(), 2, "{source:?}");
        assert_eq!(program.to_string(), "iftrue 5");
    }
}

#[test]
fn statement_cut_short_by_closing_brace_at_end_of_input() {
    assert_eq!(error_messages("if (true) { 1 + }"), ["no prefix parse function for } found"]);
}

#[test]
fn inner_block_brace_does_not_end_the_enclosing_block() {
    let (program, errors) = parse("if (true) { (if (x) { 1 } ; 2 } 3");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "iftrue 23");
}

#[test]
fn missing_prefix_function() {
    assert_eq!(error_messages("+5;"), ["no prefix parse function for + found"]);
    assert_eq!(error_messages("5 + ;"), ["no prefix parse function for ; found"]);
    assert_eq!(error_messages("@"), ["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn integer_out_of_range() {
    assert_eq!(error_messages("99999999999999999999"),
               ["could not parse 99999999999999999999 as integer"]);
}

#[test]
fn grouping_requires_closing_paren() {
    assert_eq!(error_messages("(5 + 5"), ["expected next token to be ), got EOF instead"]);
    assert_eq!(error_messages("(5 + 5;"), ["expected next token to be ), got ; instead"]);
}

#[test]
fn if_requires_parens_and_braces() {
    assert_eq!(error_messages("if x { 1 }"), ["expected next token to be (, got IDENT instead"]);
    assert_eq!(error_messages("if (x) 1"), ["expected next token to be {, got INT instead"]);
    assert_eq!(error_messages("if (x) { 1 } else 2"),
               ["expected next token to be {, got INT instead"]);
    assert_eq!(error_messages("if (x) { x"), ["expected next token to be }, got EOF instead"]);
}

struct ScriptedTokens(VecDeque<Token>);

impl TokenSource for ScriptedTokens {
    fn next_token(&mut self) -> Token {
        self.0.pop_front().unwrap_or_else(Token::eof)
    }
}

#[test]
fn parser_accepts_any_token_source() {
    let tokens = [Token::new(TokenKind::Int, "1"),
                  Token::new(TokenKind::Plus, "+"),
                  Token::new(TokenKind::Int, "2"),
                  Token::new(TokenKind::Asterisk, "*"),
                  Token::new(TokenKind::Int, "3")];
    let mut parser = Parser::new(ScriptedTokens(tokens.into_iter().collect()));

    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "(1 + (2 * 3))");
}
