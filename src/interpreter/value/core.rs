use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::BlockStmt,
    interpreter::{
        environment::Env,
        evaluator::builtin::Builtin,
        value::hash_key::HashKey,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a script can produce: integers, booleans,
/// strings, the null value, arrays, hashes, user functions, and builtins.
/// Values are logically immutable; containers are reference counted and
/// every producing operation allocates a new container.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by the boolean literals, comparison operators and `!`.
    Bool(bool),
    /// An immutable string of bytes.
    String(Rc<str>),
    /// The absence of a value: out-of-range indexing, a missing hash key, or
    /// an `if` without a taken branch.
    Null,
    /// An ordered array of values.
    Array(Rc<Vec<Self>>),
    /// An associative container from hashable keys to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A native builtin function.
    Builtin(&'static Builtin),
}

/// One entry of a hash value.
///
/// The original key value is stored next to the mapped value so the hash can
/// be displayed with the keys the script wrote, not their reduced bits.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as the script wrote it.
    pub key:   Value,
    /// The mapped value.
    pub value: Value,
}

/// A user-defined function value: parameters, body, and the environment the
/// `fn` literal was evaluated in. Calls extend that environment, which is
/// what makes closures work.
pub struct FunctionValue {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStmt,
    /// The captured defining environment.
    pub env:        Env,
}

impl std::fmt::Debug for FunctionValue {
    // The captured environment is skipped: it may transitively contain this
    // very function.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    /// Structural equality for data, identity for code: functions compare by
    /// allocation and builtins by table entry, never by captured
    /// environment.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl Value {
    /// The value's type name as it appears in error messages.
    ///
    /// ## Example
    /// ```
    /// use hilt::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(true).type_name(), "Boolean");
    /// assert_eq!(Value::Null.type_name(), "Null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Bool(_) => "Boolean",
            Self::String(_) => "String",
            Self::Null => "Null",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::Function(_) => "Function",
            Self::Builtin(_) => "Builtin",
        }
    }

    /// Whether a conditional treats this value as true.
    ///
    /// Everything is truthy except `Null` and `false`; in particular every
    /// integer is truthy, including `0`.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Reduces the value to a [`HashKey`], if it is a hashable type.
    ///
    /// Integers, booleans and strings are hashable; everything else returns
    /// `None` and is rejected as a hash key at evaluation time.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::of_integer(*value)),
            Self::Bool(value) => Some(HashKey::of_bool(*value)),
            Self::String(value) => Some(HashKey::of_str(value)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value the way the shell prints it: integers in decimal,
    /// strings as their raw bytes, arrays and hashes recursively, functions
    /// as their source form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;

                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{parameter}")?;
                }

                write!(f, ") {{\n{}\n}}", function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
