use tracing::trace;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{NULL, Value},
    },
};

impl Evaluator {
    /// Evaluates an infix operation between two already evaluated operands.
    ///
    /// Dispatch is on the pair of operand types:
    /// - integer and integer: `+ - * /` use checked 64-bit arithmetic (division
    ///   truncates toward zero) and `< > == !=` compare numerically;
    /// - boolean and boolean: only `==` and `!=` are defined;
    /// - anything else, including every mixed pair, yields `null`.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] for an integer divided by zero.
    /// - [`RuntimeError::Overflow`] when the result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let v = Evaluator::eval_infix(InfixOperator::Slash, Value::Integer(-7), Value::Integer(2));
    /// assert_eq!(v.unwrap(), Value::Integer(-3));
    ///
    /// let v = Evaluator::eval_infix(InfixOperator::Plus, Value::Boolean(true), Value::Boolean(false));
    /// assert_eq!(v.unwrap(), Value::Null);
    ///
    /// assert!(Evaluator::eval_infix(InfixOperator::Slash, Value::Integer(1), Value::Integer(0)).is_err());
    /// ```
    pub fn eval_infix(operator: InfixOperator, left: Value, right: Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => Self::eval_integer_infix(operator, l, r),
            (Value::Boolean(l), Value::Boolean(r)) => Ok(Self::eval_boolean_infix(operator, l, r)),
            _ => {
                trace!(left = left.type_name(),
                       right = right.type_name(),
                       %operator,
                       "mismatched operands yield null");
                Ok(NULL)
            },
        }
    }

    fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
        let overflow = || RuntimeError::Overflow { operator: operator.to_string() };

        match operator {
            InfixOperator::Plus => left.checked_add(right).map(Value::from).ok_or_else(overflow),
            InfixOperator::Minus => left.checked_sub(right).map(Value::from).ok_or_else(overflow),
            InfixOperator::Asterisk => left.checked_mul(right).map(Value::from).ok_or_else(overflow),
            InfixOperator::Slash => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { left });
                }
                left.checked_div(right).map(Value::from).ok_or_else(overflow)
            },
            InfixOperator::Lt => Ok((left < right).into()),
            InfixOperator::Gt => Ok((left > right).into()),
            InfixOperator::Eq => Ok((left == right).into()),
            InfixOperator::NotEq => Ok((left != right).into()),
        }
    }

    const fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> Value {
        match operator {
            InfixOperator::Eq => Value::Boolean(left == right),
            InfixOperator::NotEq => Value::Boolean(left != right),
            _ => NULL,
        }
    }
}
