use std::iter::Peekable;

use crate::{
    ast::{BlockStmt, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{consume_optional_semicolon, expect_token, parse_identifier},
        },
    },
};

/// Parses a whole program.
///
/// Statements are parsed one after another until the token stream is
/// exhausted. Parse errors do not abort parsing: the failed statement is
/// discarded, the error is recorded, and parsing resumes at the next
/// statement boundary. A program that produced any errors must not be
/// evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`] together with every recorded [`ParseError`].
///
/// # Examples
/// ```
/// use hilt::interpreter::{lexer::lex, parser::statement::parse_program};
///
/// let tokens = lex("let x = 1; let = 2; let y = 3;");
/// let (program, errors) = parse_program(&mut tokens.iter().peekable());
///
/// assert_eq!(program.statements.len(), 2);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> (Program, Vec<ParseError>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut program = Program::default();
    let mut errors = Vec::new();

    while tokens.peek().is_some() {
        match parse_statement(tokens) {
            Ok(statement) => program.statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    (program, errors)
}

/// Skips ahead to the most likely start of the next statement after a parse
/// error: just past the next `;`, or right before a `let`/`return`, or the
/// end of input. No panic-mode cleverness; good enough for a shell.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::SemiColon => {
                tokens.next();
                return;
            },
            Token::Let | Token::Return => return,
            _ => {
                tokens.next();
            },
        }
    }
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// A trailing `;` is optional after each form and consumed when present.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Let, line)) => {
            let line = *line;
            tokens.next();
            parse_let_statement(tokens, line)
        },
        Some((Token::Return, line)) => {
            let line = *line;
            tokens.next();
            parse_return_statement(tokens, line)
        },
        _ => parse_expression_statement(tokens),
    }
}

/// Parses the remainder of a `let` binding: `let <identifier> = <expression>`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the binding name is missing,
/// - `=` is missing,
/// - the value expression is malformed.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign)?;

    let value = parse_expression(tokens, Precedence::Lowest)?;
    consume_optional_semicolon(tokens);

    Ok(Statement::Let { name, value, line })
}

/// Parses the remainder of a `return` statement: `return <expression>`.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let value = parse_expression(tokens, Precedence::Lowest)?;
    consume_optional_semicolon(tokens);

    Ok(Statement::Return { value, line })
}

/// Parses a standalone expression as a statement.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens, Precedence::Lowest)?;
    consume_optional_semicolon(tokens);

    Ok(Statement::Expression { expr, line })
}

/// Parses a braced statement block: `{ <statements> }`.
///
/// Blocks only appear as conditional and function bodies. Reaching the end
/// of input before the closing `}` is an error.
pub(in crate::interpreter::parser) fn parse_block_statement<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<BlockStmt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect_token(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(BlockStmt { statements, line })
}
