use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies an infix operator to two evaluated operands.
///
/// The operand types select the rule set: integers support arithmetic and
/// all comparisons, booleans only `==` and `!=`, strings only `+`. Operands
/// of two different types are a `type mismatch`; same-typed operands without
/// a matching rule are an `unknown operator`.
///
/// # Parameters
/// - `op`: The infix operator.
/// - `left`: The evaluated left operand.
/// - `right`: The evaluated right operand.
///
/// # Returns
/// The resulting value, or a `RuntimeError`.
///
/// # Example
/// ```
/// use hilt::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::eval_infix, value::core::Value},
/// };
///
/// let sum = eval_infix(InfixOperator::Add,
///                      &Value::Integer(40),
///                      &Value::Integer(2));
///
/// assert_eq!(sum, Ok(Value::Integer(42)));
/// ```
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Bool(l), Value::Bool(r)) => match op {
            InfixOperator::Equal => Ok(Value::Bool(l == r)),
            InfixOperator::NotEqual => Ok(Value::Bool(l != r)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          op,
                                                          right: right.type_name() }),
        },
        (Value::String(l), Value::String(r)) => match op {
            InfixOperator::Add => Ok(Value::String(Rc::from(format!("{l}{r}")))),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          op,
                                                          right: right.type_name() }),
        },
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             op,
                                             right: right.type_name() })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                      op,
                                                      right: right.type_name() }),
    }
}

/// Integer arithmetic and comparisons.
///
/// Arithmetic is checked: overflowing the 64-bit range, including the
/// `i64::MIN / -1` edge, is a runtime error rather than a silent wrap, and
/// division by zero is its own error.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> Result<Value, RuntimeError> {
    match op {
        InfixOperator::Add => left.checked_add(right)
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::IntegerOverflow),
        InfixOperator::Sub => left.checked_sub(right)
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::IntegerOverflow),
        InfixOperator::Mul => left.checked_mul(right)
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::IntegerOverflow),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }

            left.checked_div(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::IntegerOverflow)
        },
        InfixOperator::Equal => Ok(Value::Bool(left == right)),
        InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
        InfixOperator::Less => Ok(Value::Bool(left < right)),
        InfixOperator::Greater => Ok(Value::Bool(left > right)),
    }
}
