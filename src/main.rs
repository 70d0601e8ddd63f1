use std::fs;

use clap::Parser;
use hilt::{
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::lex,
        parser::statement::parse_program,
    },
    shell,
};

/// hilt is a small, dynamically-typed scripting language with first-class
/// functions, arrays and hashes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells hilt to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Inline source text, or a script path together with --file. When
    /// omitted, the interactive shell starts instead.
    contents: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        shell::start();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_script(&script);
}

/// Runs one script through the whole pipeline and prints its result.
///
/// Parse errors block evaluation; the final value is printed unless the
/// script ended in a statement without one.
fn run_script(source: &str) {
    let tokens = lex(source);
    let (program, errors) = parse_program(&mut tokens.iter().peekable());

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        return;
    }

    let env = Environment::new();
    match Evaluator::new().eval_program(&program, &env) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(error) => eprintln!("ERROR: {error}"),
    }
}
