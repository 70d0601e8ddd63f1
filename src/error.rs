/// Parsing errors.
///
/// Defines all error types that can occur during parsing of a token stream.
/// Parse errors include syntax mistakes, unexpected tokens, and illegal input
/// fragments, and are detected before any evaluation happens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unresolved identifiers, type mismatches, unsupported
/// operators, bad hash keys, arity violations, division by zero, and integer
/// overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
