use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// The root of a parsed source text: its top-level statements in order.
///
/// `Display` renders the canonical, fully parenthesized form of the program,
/// which makes operator precedence visible.
///
/// ## Example
/// ```
/// use monkey::interpreter::parser::core::parse;
///
/// let (program, errors) = parse("a + b * c; -a * b");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))((-a) * b)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  Identifier,
        /// The bound expression.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// A bare expression used as a statement.
    Expression {
        /// Literal text of the first token of the expression.
        literal:    String,
        /// The wrapped expression.
        expression: Expression,
    },
}

/// A brace-delimited sequence of statements used as a branch body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the braces, in order.
    pub statements: Vec<Statement>,
}

/// A name reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// A prefix operation such as `-x` or `!x`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
}

/// Operators that appear in front of their operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `!`
    Bang,
    /// `-`
    Minus,
}

/// Operators that appear between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

/// A borrowed reference to any node of the tree, so a single entry point can
/// evaluate a whole program or one of its parts.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A whole program.
    Program(&'a Program),
    /// A single statement.
    Statement(&'a Statement),
    /// A block.
    Block(&'a BlockStatement),
    /// A single expression.
    Expression(&'a Expression),
}

impl Statement {
    /// Literal text of the token that starts this statement.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::parser::core::parse;
    ///
    /// let (program, _) = parse("let x = 1; return x; foo;");
    /// let literals: Vec<&str> = program.statements.iter().map(|s| s.token_literal()).collect();
    ///
    /// assert_eq!(literals, ["let", "return", "foo"]);
    /// ```
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let { .. } => "let",
            Self::Return { .. } => "return",
            Self::Expression { literal, .. } => literal,
        }
    }
}

impl Identifier {
    /// Creates an identifier named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PrefixOperator {
    /// Maps a token kind to the prefix operator it spells, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Bang),
            TokenKind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

impl InfixOperator {
    /// Maps a token kind to the infix operator it spells, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::Asterisk => Some(Self::Asterisk),
            TokenKind::Slash => Some(Self::Slash),
            TokenKind::Lt => Some(Self::Lt),
            TokenKind::Gt => Some(Self::Gt),
            TokenKind::Eq => Some(Self::Eq),
            TokenKind::NotEq => Some(Self::NotEq),
            _ => None,
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression, .. } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Bang => "!",
                        Self::Minus => "-",
                    })
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Plus => "+",
                        Self::Minus => "-",
                        Self::Asterisk => "*",
                        Self::Slash => "/",
                        Self::Lt => "<",
                        Self::Gt => ">",
                        Self::Eq => "==",
                        Self::NotEq => "!=",
                    })
    }
}
