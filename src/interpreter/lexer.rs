use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Identifiers are maximal ASCII letter runs; digits and underscores are
/// deliberately not part of identifiers.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// String literal tokens; the payload is the interior of the quotes.
    /// No escape sequences are recognized.
    #[regex(r#""[^"]*""#, parse_string)]
    String(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding names such as `x` or `square`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    SemiColon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `:`
    #[token(":")]
    Colon,

    /// Any byte no other rule recognizes, including the opening quote of an
    /// unterminated string. The parser rejects these.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Illegal(String),

    /// Newlines are skipped but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run does not fit in an `i64`; the slice then
///   surfaces as an [`Token::Illegal`] token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the interior of a string literal from the current token slice.
///
/// Embedded newlines are legal string content and are counted so that line
/// numbers stay accurate for the tokens that follow.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without the surrounding quotes.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.bytes().filter(|&b| b == b'\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes an entire source text.
///
/// Lexing is total: every input produces a token vector, and bytes that no
/// rule recognizes come back as [`Token::Illegal`] for the parser to reject.
/// Each token is paired with the line it was read from.
///
/// # Parameters
/// - `source`: The source text to tokenize.
///
/// # Returns
/// All tokens in source order; the end of the vector is the end of input.
///
/// # Examples
/// ```
/// use hilt::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let five = 5;");
/// let kinds = tokens.into_iter().map(|(token, _)| token).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![Token::Let,
///                 Token::Identifier("five".to_string()),
///                 Token::Assign,
///                 Token::Int(5),
///                 Token::SemiColon]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens
}
