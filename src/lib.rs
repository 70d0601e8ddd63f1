//! # hilt
//!
//! hilt is a small, dynamically-typed scripting language with a C-family
//! syntax and a tree-walking interpreter. It has first-class functions with
//! closures, arrays, hashes, and a fixed set of builtins, and it runs source
//! text directly off the syntax tree without any intermediate bytecode.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Evaluator,
    lexer::lex,
    parser::statement::parse_program,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders the canonical text form used to verify parsing.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. It standardizes error reporting: parse errors carry
/// source lines, runtime errors carry the exact message text scripts
/// observe.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive shell.
///
/// A read-eval-print loop that keeps one environment alive across lines, so
/// bindings from earlier inputs stay visible.
pub mod shell;

/// Evaluates a complete source text in a fresh environment.
///
/// The source is lexed and parsed first; if any parse errors were recorded,
/// the first one is returned and nothing is evaluated. Otherwise the program
/// runs against a new global environment with the `print` builtin writing to
/// stdout.
///
/// # Errors
/// Returns the first parse error, or the runtime error that aborted
/// evaluation.
///
/// # Examples
/// ```
/// use hilt::{eval_source, interpreter::value::core::Value};
///
/// let result = eval_source("let x = 2; x * 21");
/// assert_eq!(result.unwrap(), Some(Value::Integer(42)));
///
/// // `y` is never bound, so evaluation fails.
/// let result = eval_source("y + 1");
/// assert!(result.is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens = lex(source);
    let (program, mut errors) = parse_program(&mut tokens.iter().peekable());

    if !errors.is_empty() {
        return Err(Box::new(errors.remove(0)));
    }

    let env = Environment::new();
    let mut evaluator = Evaluator::new();

    Ok(evaluator.eval_program(&program, &env)?)
}
