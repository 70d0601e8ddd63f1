use log::{debug, info};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Evaluator,
    lexer::lex,
    parser::statement::parse_program,
};

const PROMPT: &str = "hilt=> ";

/// Runs the interactive shell until end of input.
///
/// Each line goes through the full pipeline: lex, parse, evaluate. Parse
/// errors are printed and block evaluation of that line; runtime errors are
/// printed as `ERROR: …`. Bindings persist across lines because every line
/// evaluates against the same environment.
///
/// Ctrl-C clears the current line; Ctrl-D exits.
pub fn start() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Unable to initialize the line editor: {error}");
            return;
        },
    };

    info!("starting interactive shell");

    let env = Environment::new();
    let mut evaluator = Evaluator::new();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                let tokens = lex(&line);
                let (program, errors) = parse_program(&mut tokens.iter().peekable());

                if !errors.is_empty() {
                    debug!("rejected input with {} parse errors", errors.len());
                    for error in &errors {
                        println!("{error}");
                    }
                    continue;
                }

                match evaluator.eval_program(&program, &env) {
                    Ok(Some(value)) => println!("{value}"),
                    Ok(None) => {},
                    Err(error) => println!("ERROR: {error}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            },
        }
    }
}
