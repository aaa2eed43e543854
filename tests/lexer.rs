use monkey::interpreter::lexer::{Lexer, Token, TokenKind, TokenSource};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(source);
    let mut out = Vec::new();
    loop {
        let Token { kind, literal } = lexer.next_token();
        out.push((kind, literal));
        if kind == TokenKind::Eof {
            return out;
        }
    }
}

fn expect(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter().map(|(k, l)| (*k, (*l).to_string())).collect()
}

#[test]
fn statements_and_operators() {
    use TokenKind::{
        Asterisk, Assign, Bang, Else, Eof, Eq, False, Gt, Ident, If, Int, LBrace, LParen, Let,
        Lt, Minus, NotEq, Plus, RBrace, RParen, Return, Semicolon, Slash, True,
    };

    let source = "let five = 5;
let ten = 10;
let sum = five + ten;
!-/*5;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
10 == 10;
10 != 9;";

    assert_eq!(tokens(source),
               expect(&[(Let, "let"),
                        (Ident, "five"),
                        (Assign, "="),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (Let, "let"),
                        (Ident, "ten"),
                        (Assign, "="),
                        (Int, "10"),
                        (Semicolon, ";"),
                        (Let, "let"),
                        (Ident, "sum"),
                        (Assign, "="),
                        (Ident, "five"),
                        (Plus, "+"),
                        (Ident, "ten"),
                        (Semicolon, ";"),
                        (Bang, "!"),
                        (Minus, "-"),
                        (Slash, "/"),
                        (Asterisk, "*"),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (Int, "5"),
                        (Lt, "<"),
                        (Int, "10"),
                        (Gt, ">"),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (If, "if"),
                        (LParen, "("),
                        (Int, "5"),
                        (Lt, "<"),
                        (Int, "10"),
                        (RParen, ")"),
                        (LBrace, "{"),
                        (Return, "return"),
                        (True, "true"),
                        (Semicolon, ";"),
                        (RBrace, "}"),
                        (Else, "else"),
                        (LBrace, "{"),
                        (Return, "return"),
                        (False, "false"),
                        (Semicolon, ";"),
                        (RBrace, "}"),
                        (Int, "10"),
                        (Eq, "=="),
                        (Int, "10"),
                        (Semicolon, ";"),
                        (Int, "10"),
                        (NotEq, "!="),
                        (Int, "9"),
                        (Semicolon, ";"),
                        (Eof, "")]));
}

#[test]
fn keywords_need_word_boundaries() {
    assert_eq!(tokens("letter iffy returned true_ x1"),
               expect(&[(TokenKind::Ident, "letter"),
                        (TokenKind::Ident, "iffy"),
                        (TokenKind::Ident, "returned"),
                        (TokenKind::Ident, "true_"),
                        (TokenKind::Ident, "x1"),
                        (TokenKind::Eof, "")]));
}

#[test]
fn unknown_characters_are_illegal_and_lexing_continues() {
    assert_eq!(tokens("5 @ 3"),
               expect(&[(TokenKind::Int, "5"),
                        (TokenKind::Illegal, "@"),
                        (TokenKind::Int, "3"),
                        (TokenKind::Eof, "")]));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(tokens("1 // one\n// nothing here\n2"),
               expect(&[(TokenKind::Int, "1"), (TokenKind::Int, "2"), (TokenKind::Eof, "")]));
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn empty_input_is_only_eof() {
    assert_eq!(tokens("   \n\t "), expect(&[(TokenKind::Eof, "")]));
}

#[test]
fn kind_names_used_in_diagnostics() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::RParen.to_string(), ")");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Let.to_string(), "LET");
}
