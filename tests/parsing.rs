use hilt::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{lexer::lex, parser::statement::parse_program},
};

fn parse(source: &str) -> Program {
    let tokens = lex(source);
    let (program, errors) = parse_program(&mut tokens.iter().peekable());
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    program
}

fn parse_errors(source: &str) -> Vec<ParseError> {
    let tokens = lex(source);
    let (_, errors) = parse_program(&mut tokens.iter().peekable());
    errors
}

fn canonical(source: &str) -> String {
    parse(source).to_string()
}

#[test]
fn let_statements_bind_names() {
    let program = parse("let x = 6;\nlet y = 77;\nlet zzz = 888;");
    assert_eq!(program.statements.len(), 3);

    let expected = [("x", 6), ("y", 77), ("zzz", 888)];
    for (statement, (name, value)) in program.statements.iter().zip(expected) {
        match statement {
            Statement::Let { name: bound,
                             value: Expr::IntegerLiteral { value: literal, .. },
                             .. } => {
                assert_eq!(bound, name);
                assert_eq!(*literal, value);
            },
            other => panic!("expected an integer let statement, got {other:?}"),
        }
    }
}

#[test]
fn return_statements_carry_their_expression() {
    let program = parse("return x;\nreturn 7;");
    assert_eq!(program.statements.len(), 2);

    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }),
                "expected a return statement, got {statement:?}");
    }
}

#[test]
fn operator_precedence_is_canonical() {
    let tests = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in tests {
        assert_eq!(canonical(source), expected, "source: {source}");
    }
}

#[test]
fn conditional_and_function_literals_render() {
    assert_eq!(canonical("if (x < y) { x }"), "if(x < y) x");
    assert_eq!(canonical("if (x < y) { x } else { y }"), "if(x < y) xelse y");
    assert_eq!(canonical("fn(x, y) { x + y }"), "fn(x, y) (x + y)");
    assert_eq!(canonical("fn() { 5; }"), "fn() 5");
    assert_eq!(canonical("let square = fn(x) { x * x };"),
               "let square = fn(x) (x * x);");
}

#[test]
fn canonical_form_is_stable_under_reparsing() {
    let sources = ["-a * b",
                   "let x = 1 + 2 * 3;",
                   "if (x < y) { x } else { y }",
                   "fn(x, y) { return x + y; }",
                   "a * [1, 2, 3, 4][b * c] * d",
                   "add(a, b, 1, 2 * 3)"];

    for source in sources {
        let first = canonical(source);
        assert_eq!(canonical(&first), first, "source: {source}");
    }
}

#[test]
fn call_expressions_keep_their_shape() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    assert_eq!(program.statements.len(), 1);

    let Statement::Expression { expr: Expr::Call { function, arguments, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a call statement, got {:?}", program.statements[0]);
    };

    assert!(matches!(&**function, Expr::Identifier { name, .. } if name == "add"));
    assert_eq!(arguments.len(), 3);
}

#[test]
fn array_and_hash_literals_parse() {
    let program = parse("[1, 2 * 2, 3 + 3]");
    let Statement::Expression { expr: Expr::ArrayLiteral { elements, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected an array literal, got {:?}", program.statements[0]);
    };
    assert_eq!(elements.len(), 3);

    let program = parse(r#"{"one": 1, "two": 2, "three": 3}"#);
    let Statement::Expression { expr: Expr::HashLiteral { pairs, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a hash literal, got {:?}", program.statements[0]);
    };
    assert_eq!(pairs.len(), 3);

    let program = parse("{}");
    let Statement::Expression { expr: Expr::HashLiteral { pairs, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a hash literal, got {:?}", program.statements[0]);
    };
    assert!(pairs.is_empty());
}

#[test]
fn semicolons_are_optional_after_statements() {
    assert_eq!(parse("5; 6").statements.len(), 2);
    assert_eq!(parse("5\n6").statements.len(), 2);
    assert_eq!(parse("let x = 5\nx").statements.len(), 2);
}

#[test]
fn malformed_let_statements_are_errors() {
    for source in ["let = 5;", "let x 5;", "let;", "let x =;"] {
        let errors = parse_errors(source);
        assert!(!errors.is_empty(), "expected errors for {source:?}");
    }
}

#[test]
fn failed_statements_are_discarded_but_parsing_continues() {
    let tokens = lex("let x = 1; let = 2; let y = 3;");
    let (program, errors) = parse_program(&mut tokens.iter().peekable());

    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(), "let x = 1;let y = 3;");
}

#[test]
fn tokens_without_a_prefix_rule_are_errors() {
    let errors = parse_errors("+ 5");
    assert!(matches!(errors.first(), Some(ParseError::NoPrefixFunction { .. })),
            "got {errors:?}");
}

#[test]
fn illegal_tokens_are_rejected() {
    let errors = parse_errors("let a = 5 @ 3;");
    assert!(!errors.is_empty());

    let errors = parse_errors("\"abc");
    assert!(matches!(errors.first(), Some(ParseError::IllegalToken { .. })),
            "got {errors:?}");
}

#[test]
fn duplicate_function_parameters_are_rejected() {
    let errors = parse_errors("fn(x, y, x) { x }");
    assert!(matches!(errors.first(), Some(ParseError::DuplicateParameter { name, .. }) if name == "x"),
            "got {errors:?}");
}

#[test]
fn unterminated_blocks_are_errors() {
    for source in ["if (true) { 5", "fn(x) { x", "if (true) { 5 } else {"] {
        let errors = parse_errors(source);
        assert!(matches!(errors.first(), Some(ParseError::UnexpectedEndOfInput { .. })),
                "source {source:?} got {errors:?}");
    }
}

#[test]
fn parse_error_lines_point_at_the_failure() {
    let errors = parse_errors("let x = 1;\nlet = 2;");
    match errors.first() {
        Some(ParseError::UnexpectedToken { line, .. }) => assert_eq!(*line, 2),
        other => panic!("expected an unexpected-token error, got {other:?}"),
    }
}
