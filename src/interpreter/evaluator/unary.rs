use tracing::trace;

use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{FALSE, NULL, TRUE, Value},
    },
};

impl Evaluator {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// - `!` negates by truthiness: `!true` is `false`, `!false` and `!null`
    ///   are `true`, and `!` of any integer is `false`.
    /// - `-` negates an integer. Any other operand yields `null`.
    ///
    /// # Errors
    /// [`RuntimeError::Overflow`] when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Minus, Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Bang, Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Boolean(false));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Minus, Value::Boolean(true)).unwrap();
    /// assert_eq!(v, Value::Null);
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, right: Value) -> EvalResult<Value> {
        match operator {
            PrefixOperator::Bang => Ok(Self::eval_bang(right)),
            PrefixOperator::Minus => Self::eval_minus(right),
        }
    }

    const fn eval_bang(right: Value) -> Value {
        match right {
            Value::Boolean(true) | Value::Integer(_) => FALSE,
            Value::Boolean(false) | Value::Null => TRUE,
        }
    }

    fn eval_minus(right: Value) -> EvalResult<Value> {
        match right {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or_else(|| RuntimeError::Overflow { operator: "-".to_string() }),
            other => {
                trace!(operand = other.type_name(), "'-' on non-integer yields null");
                Ok(NULL)
            },
        }
    }
}
