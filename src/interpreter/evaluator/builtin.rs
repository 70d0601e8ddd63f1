use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluator (for the print sink) and a slice of
/// evaluated argument values, and returns the call's result.
pub type BuiltinFn = fn(&mut Evaluator, &[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` means any number of arguments is accepted.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

/// One entry of the builtin registry.
///
/// Builtin values in scripts are references into the static table, so two
/// mentions of the same builtin compare equal by address.
#[derive(Debug)]
pub struct Builtin {
    /// The name scripts call the builtin by.
    pub name:  &'static str,
    /// The allowed argument count.
    pub arity: Arity,
    /// The native handler.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating the lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"    => { arity: Arity::Exact(1), func: len },
    "head"   => { arity: Arity::Exact(1), func: head },
    "tail"   => { arity: Arity::Exact(1), func: tail },
    "last"   => { arity: Arity::Exact(1), func: last },
    "append" => { arity: Arity::Exact(2), func: append },
    "print"  => { arity: Arity::Variadic, func: print },
}

/// Resolves a builtin by name.
///
/// Consulted after the environment chain, so a script binding named like a
/// builtin shadows it.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Measures a value: the byte length of a string or the element count of an
/// array.
#[allow(clippy::cast_possible_wrap)]
fn len(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::String(string) => Ok(Value::Integer(string.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                         type_name: other.type_name(), }.into()),
    }
}

/// Returns the first element of an array, or `Null` when it is empty.
fn head(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "head",
                                                         type_name: other.type_name(), }.into()),
    }
}

/// Returns a new array holding everything but the first element, or `Null`
/// when the array is empty.
fn tail(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(Value::Null);
            }

            Ok(Value::from(elements[1..].to_vec()))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "tail",
                                                         type_name: other.type_name(), }.into()),
    }
}

/// Returns the last element of an array, or `Null` when it is empty.
fn last(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "last",
                                                         type_name: other.type_name(), }.into()),
    }
}

/// Returns a new array with one value appended; the original array is
/// untouched.
fn append(_: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut appended = Vec::with_capacity(elements.len() + 1);
            appended.extend(elements.iter().cloned());
            appended.push(args[1].clone());

            Ok(Value::from(appended))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "append",
                                                         type_name: other.type_name(), }.into()),
    }
}

/// Writes every argument to the configured sink, one per line, and returns
/// `Null`.
fn print(evaluator: &mut Evaluator, args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        evaluator.print_line(arg);
    }

    Ok(Value::Null)
}
