/// Lexically scoped binding storage.
///
/// Declares the `Environment`: a name-to-value map with an optional
/// enclosing scope, shared by reference counting so closures keep their
/// defining scope alive.
///
/// # Responsibilities
/// - Resolves names by walking outward through enclosing scopes.
/// - Binds names in the innermost scope only.
/// - Provides the enclosed scopes function application runs in.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators, calls functions and builtins, and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals, and return unwinding.
/// - Raises runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Marks invalid input as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Drives operator precedence and associativity.
/// - Accumulates parse errors with location info instead of aborting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, booleans, strings, arrays, hashes, and functions. It
/// also provides hash-key derivation, truthiness, and display forms.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Reduces hashable values to uniform hash keys.
/// - Renders values the way the shell prints them.
pub mod value;
