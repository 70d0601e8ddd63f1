use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies a prefix operator to an evaluated operand.
///
/// `!` maps truthiness to its boolean opposite, so `!null` is `true` and
/// `!5` is `false`. `-` negates integers and rejects everything else;
/// negating `i64::MIN` overflows.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `right`: The evaluated operand.
///
/// # Returns
/// The resulting value, or a `RuntimeError` for an unsupported operand.
///
/// # Example
/// ```
/// use hilt::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::eval_prefix, value::core::Value},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negate, &Value::Integer(6));
/// assert_eq!(negated, Ok(Value::Integer(-6)));
///
/// let notted = eval_prefix(PrefixOperator::Not, &Value::Null);
/// assert_eq!(notted, Ok(Value::Bool(true)));
/// ```
pub fn eval_prefix(op: PrefixOperator, right: &Value) -> Result<Value, RuntimeError> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => value.checked_neg()
                                          .map(Value::Integer)
                                          .ok_or(RuntimeError::IntegerOverflow),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           right: right.type_name(), }),
        },
    }
}
