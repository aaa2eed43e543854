use tracing::{debug, instrument, trace};

use crate::{
    ast::{BlockStatement, Expression, Node, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::environment::Environment,
        value::{NULL, Value},
    },
};

/// Result type used by the evaluator.
///
/// All public evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the fault.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why evaluation of a subtree stopped early.
///
/// A `return` travels up through the `?` operator exactly like a fault does,
/// until the program (or the node handed to [`Evaluator::eval`]) turns it
/// back into a value.
#[derive(Debug)]
enum Unwind {
    /// A `return` statement produced this value.
    Return(Value),
    /// Evaluation failed.
    Fault(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Fault(error)
    }
}

type Flow<T> = Result<T, Unwind>;

fn settle(flow: Flow<Value>) -> EvalResult<Value> {
    match flow {
        Ok(value) | Err(Unwind::Return(value)) => Ok(value),
        Err(Unwind::Fault(error)) => Err(error),
    }
}

/// A tree-walking evaluator.
///
/// The evaluator never modifies the tree it walks. Its only state is the
/// [`Environment`] of `let` bindings, which persists between calls so an
/// interactive shell can keep variables from one line to the next.
///
/// ## Example
/// ```
/// use monkey::interpreter::{evaluator::core::Evaluator, parser::core::parse, value::Value};
///
/// let (program, errors) = parse("let a = 5; if (a > 3) { a * 2 } else { 0 }");
/// assert!(errors.is_empty());
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.eval_program(&program).unwrap(), Value::Integer(10));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Values bound by `let`.
    pub environment: Environment,
}

impl Evaluator {
    /// Creates an evaluator with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates any node of the tree.
    ///
    /// A program or block yields the value of its last statement. A `return`
    /// reached anywhere inside the node yields the returned value.
    pub fn eval<'a>(&mut self, node: impl Into<Node<'a>>) -> EvalResult<Value> {
        let flow = match node.into() {
            Node::Program(program) => self.eval_statements(&program.statements),
            Node::Statement(statement) => self.eval_statement(statement),
            Node::Block(block) => self.eval_block(block),
            Node::Expression(expression) => self.eval_expression(expression),
        };
        settle(flow)
    }

    /// Evaluates every statement of `program` in order.
    ///
    /// The result is the value of the last statement, or the value of the
    /// first `return` executed. An empty program is `null`.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; later statements are not
    /// evaluated.
    #[instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let result = settle(self.eval_statements(&program.statements));
        if let Err(error) = &result {
            debug!(%error, "evaluation stopped");
        }
        result
    }

    fn eval_statements(&mut self, statements: &[Statement]) -> Flow<Value> {
        let mut result = NULL;
        for statement in statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    fn eval_block(&mut self, block: &BlockStatement) -> Flow<Value> {
        self.eval_statements(&block.statements)
    }

    fn eval_statement(&mut self, statement: &Statement) -> Flow<Value> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value)?;
                trace!(name = %name, %value, "bind");
                self.environment.set(name.name.clone(), value);
                Ok(NULL)
            },
            Statement::Return { value } => Err(Unwind::Return(self.eval_expression(value)?)),
            Statement::Expression { expression, .. } => self.eval_expression(expression),
        }
    }

    fn eval_expression(&mut self, expression: &Expression) -> Flow<Value> {
        match expression {
            Expression::Identifier(ident) => Ok(self.environment.get(&ident.name).unwrap_or(NULL)),
            Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            Expression::BooleanLiteral(value) => Ok(Value::Boolean(*value)),
            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right)?;
                Ok(Self::eval_prefix(*operator, right)?)
            },
            Expression::Infix { left,
                                operator,
                                right, } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                Ok(Self::eval_infix(*operator, left, right)?)
            },
            Expression::If { condition,
                             consequence,
                             alternative, } => {
                if self.eval_expression(condition)?.is_truthy() {
                    self.eval_block(consequence)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative)
                } else {
                    Ok(NULL)
                }
            },
        }
    }
}
