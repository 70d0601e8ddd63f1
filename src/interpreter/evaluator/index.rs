use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies the index operator to an evaluated collection and index.
///
/// Arrays are indexed by integers; anything outside `0..len`, including
/// negative indices, reads as `Null` rather than an error. Hashes are
/// indexed by any hashable value; a missing key reads as `Null`, while an
/// unhashable key is an error. Every other combination is unsupported.
///
/// # Parameters
/// - `left`: The evaluated collection.
/// - `index`: The evaluated index.
///
/// # Returns
/// The element, `Null` for misses, or a `RuntimeError`.
///
/// # Example
/// ```
/// use hilt::interpreter::{evaluator::index::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(7)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(0)), Ok(Value::Integer(7)));
/// assert_eq!(eval_index(&array, &Value::Integer(-1)), Ok(Value::Null));
/// ```
pub fn eval_index(left: &Value, index: &Value) -> Result<Value, RuntimeError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            let element = usize::try_from(*i).ok()
                                             .and_then(|i| elements.get(i))
                                             .cloned();
            Ok(element.unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), _) => {
            let Some(key) = index.hash_key() else {
                return Err(RuntimeError::UnusableAsHashKey { type_name: index.type_name() });
            };

            Ok(pairs.get(&key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { type_name: left.type_name() }),
    }
}
