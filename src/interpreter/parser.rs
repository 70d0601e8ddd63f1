/// Expression parsing.
///
/// Contains the precedence table and the expression parser itself: prefix
/// rules for everything an expression can start with, infix rules for binary
/// operators, calls, and indexing, and the conditional, function, array, and
/// hash literal forms.
pub mod core;
/// Statement parsing.
///
/// Parses whole programs, the three statement forms (`let`, `return`,
/// expression statements), and braced statement blocks. Owns the
/// error-recovery policy: failed statements are discarded and parsing
/// resumes at the next statement boundary.
pub mod statement;
/// Shared parsing helpers.
///
/// Small utilities used across the parser: comma-separated lists, identifier
/// and exact-token expectations, and optional trailing semicolons.
pub mod utils;
