use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists, and
/// function parameter lists. It repeatedly calls `parse_item` to parse one
/// element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The line number of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or the input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes a trailing `;` when one is present.
///
/// `6;` and `6` are both valid statements, so every statement parser calls
/// this after its expression.
pub(in crate::interpreter::parser) fn consume_optional_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::SemiColon, _)) = tokens.peek() {
        tokens.next();
    }
}
