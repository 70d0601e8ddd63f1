#[derive(Debug)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was expected and what was found.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// No expression can start with the current token.
    NoPrefixFunction {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer produced a byte sequence that is not part of the language.
    IllegalToken {
        /// The offending input fragment.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function literal repeats a parameter name.
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::NoPrefixFunction { token, line } => write!(f,
                                                             "Error on line {line}: No expression may start with {token}."),

            Self::IllegalToken { token, line } => {
                write!(f, "Error on line {line}: Illegal token: {token}.")
            },

            Self::DuplicateParameter { name, line } => write!(f,
                                                              "Error on line {line}: Parameter {name} is declared twice."),
        }
    }
}

impl std::error::Error for ParseError {}
