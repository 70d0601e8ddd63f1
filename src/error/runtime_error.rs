use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The rendered message text is part of the language: scripts observe these
/// exact strings, so the `Display` impl is load-bearing and covered by tests.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator.
        op:    PrefixOperator,
        /// Type name of the operand.
        right: &'static str,
    },
    /// An infix operator was applied to same-typed operands it does not
    /// support.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A name is bound neither in any enclosing scope nor as a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// Something other than a function or builtin was called.
    NotAFunction {
        /// Type name of the called value.
        type_name: &'static str,
    },
    /// A call supplied the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many the function declares.
        want: usize,
    },
    /// A builtin received an argument type it does not work on.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// A value that cannot be hashed was used as a hash key.
    UnusableAsHashKey {
        /// Type name of the offending key.
        type_name: &'static str,
    },
    /// The index operator was applied to an unsupported combination.
    IndexNotSupported {
        /// Type name of the indexed value.
        type_name: &'static str,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed the 64-bit range.
    IntegerOverflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },
            Self::UnknownPrefixOperator { op, right } => {
                write!(f, "unknown operator: {op}{right}")
            },
            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument of `{builtin}` not supported, got {type_name}")
            },
            Self::UnusableAsHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            },
            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
