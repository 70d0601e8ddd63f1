use std::{cell::RefCell, io, io::Write, rc::Rc};

use hilt::{
    eval_source,
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::lex,
        parser::statement::parse_program,
        value::core::Value,
    },
};

fn eval(source: &str) -> Option<Value> {
    eval_source(source).unwrap_or_else(|error| panic!("script failed: {error}\n{source}"))
}

fn eval_value(source: &str) -> Value {
    eval(source).unwrap_or_else(|| panic!("script produced no value: {source}"))
}

fn eval_error(source: &str) -> String {
    match eval_source(source) {
        Ok(value) => panic!("script succeeded with {value:?} but was expected to fail: {source}"),
        Err(error) => error.to_string(),
    }
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval_value(source), Value::Integer(expected), "source: {source}");
}

fn assert_bool(source: &str, expected: bool) {
    assert_eq!(eval_value(source), Value::Bool(expected), "source: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval_value(source), Value::Null, "source: {source}");
}

#[test]
fn integer_arithmetic() {
    let tests = [("0", 0),
                 ("6", 6),
                 ("1337", 1337),
                 ("-6", -6),
                 ("-1337", -1337),
                 ("6 + 6 + 6 - 10", 8),
                 ("2 * 2 * 2 * 2", 16),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn boolean_expressions() {
    let tests = [("true", true),
                 ("false", false),
                 ("6 < 9", true),
                 ("6 > 9", false),
                 ("6 == 9", false),
                 ("6 != 9", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("(6 < 9) == true", true),
                 ("(6 < 9) == false", false),
                 ("(6 > 9) == true", false),
                 ("(6 > 9) == false", true)];

    for (source, expected) in tests {
        assert_bool(source, expected);
    }
}

#[test]
fn bang_operator() {
    let tests = [("!true", false),
                 ("!false", true),
                 ("!6", false),
                 ("!0", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!6", true)];

    for (source, expected) in tests {
        assert_bool(source, expected);
    }
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (6) { 10 }", 10);
    assert_integer("if (6 < 9) { 10 }", 10);
    assert_null("if (6 > 9) { 10 }");
    assert_integer("if (6 > 9) { 10 } else { 20 }", 20);
    assert_integer("if (6 < 9) { 10 } else { 20 }", 10);
}

#[test]
fn every_integer_is_truthy() {
    for n in [-5, -1, 0, 1, 42] {
        assert_integer(&format!("if ({n}) {{ 1 }} else {{ 0 }}"), 1);
    }

    assert_integer("if (false) { 1 } else { 0 }", 0);
    // A branchless `if` yields the null value, which is falsy.
    assert_integer("if (if (false) { 1 }) { 1 } else { 0 }", 0);
}

#[test]
fn return_statements_unwind() {
    let tests = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
                 ("let f = fn(x) { return x; x + 10; }; f(10);", 10),
                 ("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
                  20)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn let_statements_bind_and_resolve() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_integer("let x = 5; let x = x + 1; x", 6);
}

#[test]
fn a_binding_produces_no_value() {
    assert_eq!(eval("let a = 5;"), None);
    assert_eq!(eval("5; let a = 5;"), None);
    assert_eq!(eval(""), None);
}

#[test]
fn runtime_error_messages() {
    let tests = [("5 + true;", "type mismatch: Integer + Boolean"),
                 ("5 + true; 5;", "type mismatch: Integer + Boolean"),
                 ("-true", "unknown operator: -Boolean"),
                 ("true + false;", "unknown operator: Boolean + Boolean"),
                 ("5; true + false; 5", "unknown operator: Boolean + Boolean"),
                 ("if (10 > 1) { true + false; }", "unknown operator: Boolean + Boolean"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: Boolean + Boolean"),
                 ("foobar", "identifier not found: foobar"),
                 (r#""Hello" - "World""#, "unknown operator: String - String"),
                 (r#""Hello" < "World""#, "unknown operator: String < String"),
                 (r#"{"name": "hilt"}[fn(x) { x }];"#, "unusable as hash key: Function"),
                 ("{fn(x) { x }: 1}", "unusable as hash key: Function"),
                 ("{[1, 2]: 1}", "unusable as hash key: Array"),
                 ("5[0]", "index operator not supported: Integer"),
                 ("[1, 2][true]", "index operator not supported: Array"),
                 ("5(3)", "not a function: Integer"),
                 (r#""not a fn"()"#, "not a function: String")];

    for (source, expected) in tests {
        assert_eq!(eval_error(source), expected, "source: {source}");
    }
}

#[test]
fn errors_short_circuit_left_to_right() {
    // The first failing subexpression decides the result; nothing to the
    // right of it runs.
    assert_eq!(eval_error("(missing + 1) + (5 + true)"),
               "identifier not found: missing");
    assert_eq!(eval_error("[1, missing, wrong]"), "identifier not found: missing");
    assert_eq!(eval_error("let f = fn(x) { x }; f(missing)"),
               "identifier not found: missing");
}

#[test]
fn division_edge_cases() {
    assert_eq!(eval_error("1 / 0"), "division by zero");
    assert_eq!(eval_error("let x = 5 - 5; 10 / x"), "division by zero");
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
}

#[test]
fn integer_overflow_is_an_error() {
    assert_integer("9223372036854775806 + 1", 9_223_372_036_854_775_807);
    assert_eq!(eval_error("9223372036854775807 + 1"), "integer overflow");
    assert_eq!(eval_error("0 - 9223372036854775807 - 2"), "integer overflow");
    assert_eq!(eval_error("9223372036854775807 * 2"), "integer overflow");
    assert_eq!(eval_error("-(0 - 9223372036854775807 - 1)"), "integer overflow");
    assert_eq!(eval_error("(0 - 9223372036854775807 - 1) / -1"), "integer overflow");
}

#[test]
fn function_values_render_their_source_form() {
    assert_eq!(eval_value("fn(x) { x + 2; }").to_string(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn function_application() {
    let tests = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x; }(5)", 5),
                 ("let five = fn() { 5 }; five()", 5)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn call_arity_is_checked() {
    assert_eq!(eval_error("let f = fn(x, y) { x + y }; f(1)"),
               "wrong number of arguments. got=1, want=2");
    assert_eq!(eval_error("let f = fn() { 5 }; f(1, 2, 3)"),
               "wrong number of arguments. got=3, want=0");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_integer("let adder = fn(x) { fn(y) { x + y } }; let addTwo = adder(2); addTwo(40)",
                   42);

    // Parameters shadow later bindings in the enclosing scope.
    assert_integer("let a = fn(x) { fn(y) { x + y } }; let b = a(2); let x = 99; b(3)",
                   5);

    assert_integer("let compose = fn(f, g) { fn(x) { g(f(x)) } };
                    let inc = fn(x) { x + 1 };
                    let double = fn(x) { x * 2 };
                    compose(inc, double)(5)",
                   12);
}

#[test]
fn recursion_through_the_global_scope() {
    assert_integer("let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5)",
                   120);
}

#[test]
fn string_concatenation() {
    assert_eq!(eval_value(r#""Hello" + " " + "World!""#), Value::from("Hello World!"));
    assert_eq!(eval_value(r#""a" + "b" + "c""#), Value::from("abc"));

    // Equality is not defined on strings; only `+` is.
    assert_eq!(eval_error(r#""a" == "a""#), "unknown operator: String == String");
}

#[test]
fn len_builtin() {
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("four")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);

    assert_eq!(eval_error("len(1)"), "argument of `len` not supported, got Integer");
    assert_eq!(eval_error(r#"len("one", "two")"#),
               "wrong number of arguments. got=2, want=1");
    assert_eq!(eval_error("len()"), "wrong number of arguments. got=0, want=1");
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval_value("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));

    let tests = [("[1, 2, 3][0]", 1),
                 ("[1, 2, 3][1]", 2),
                 ("[1, 2, 3][2]", 3),
                 ("let i = 0; [1][i];", 1),
                 ("[1, 2, 3][1 + 1];", 3),
                 ("let myArray = [1, 2, 3]; myArray[2];", 3),
                 ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
    assert_null("[][0]");
}

#[test]
fn array_builtins() {
    assert_integer("head([1, 2, 3])", 1);
    assert_null("head([])");
    assert_eq!(eval_value("tail([1, 2, 3])"),
               Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_null("tail([])");
    assert_eq!(eval_value("tail([1])"), Value::from(Vec::new()));
    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_eq!(eval_value("append([1], 2)"),
               Value::from(vec![Value::Integer(1), Value::Integer(2)]));

    assert_eq!(eval_error("head(1)"), "argument of `head` not supported, got Integer");
    assert_eq!(eval_error(r#"tail("text")"#),
               "argument of `tail` not supported, got String");
    assert_eq!(eval_error("last(false)"),
               "argument of `last` not supported, got Boolean");
    assert_eq!(eval_error("append(1, 2)"),
               "argument of `append` not supported, got Integer");
}

#[test]
fn append_leaves_the_original_untouched() {
    assert_integer("let a = [1]; let b = append(a, 2); len(a)", 1);
    assert_integer("let a = [1]; let b = append(a, 2); len(b)", 2);
}

#[test]
fn map_and_reduce_compose_from_builtins() {
    assert_eq!(eval_value("let map = fn(arr, f) {
                               if (len(arr) == 0) {
                                   []
                               } else {
                                   append(map(tail(arr), f), f(head(arr)))
                               }
                           };
                           map([1, 2, 3], fn(x) { x * x })"),
               Value::from(vec![Value::Integer(9), Value::Integer(4), Value::Integer(1)]));

    assert_integer("let reduce = fn(arr, initial, f) {
                        if (len(arr) == 0) {
                            initial
                        } else {
                            reduce(tail(arr), f(initial, head(arr)), f)
                        }
                    };
                    reduce([1, 2, 3, 4, 5], 0, fn(acc, x) { acc + x })",
                   15);
}

#[test]
fn hash_literals_and_indexing() {
    let tests = [(r#"{"foo": 5}["foo"]"#, 5),
                 (r#"let key = "foo"; {"foo": 5}[key]"#, 5),
                 ("{5: 5}[5]", 5),
                 ("{true: 5}[true]", 5),
                 ("{false: 5}[false]", 5),
                 (r#"let two = "two"; {"one": 1, two: 2, "th" + "ree": 3}["three"]"#, 3)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    assert_null(r#"{"foo": 5}["bar"]"#);
    assert_null(r#"{}["foo"]"#);
}

#[test]
fn hash_keys_compare_by_value_not_identity() {
    for key in ["0", "1", "-3", "true", "false", r#""k""#, r#""spaced key""#] {
        assert_integer(&format!("let h = {{{key}: 1}}; h[{key}]"), 1);
    }
}

#[test]
fn hash_keys_of_different_types_do_not_collide() {
    assert_integer(r#"let h = {1: 10, true: 20}; h[1]"#, 10);
    assert_integer(r#"let h = {1: 10, true: 20}; h[true]"#, 20);
    assert_integer(r#"let h = {0: 10, false: 20}; h[0]"#, 10);
    assert_integer(r#"let h = {0: 10, false: 20}; h[false]"#, 20);
}

#[test]
fn hash_literal_last_write_wins() {
    assert_eq!(eval_value(r#"{1: "a", 1: "b"}[1]"#), Value::from("b"));
}

#[test]
fn builtins_are_values_but_can_be_shadowed() {
    assert_eq!(eval_value("len").to_string(), "builtin function");
    assert_integer("let len = 5; len", 5);
    assert_integer("let apply = fn(f, x) { f(x) }; apply(len, [1, 2])", 2);
}

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn print_writes_to_the_configured_sink() {
    let buffer = SharedBuffer::default();
    let mut evaluator = Evaluator::with_output(Box::new(buffer.clone()));
    let env = Environment::new();

    let tokens = lex(r#"print("hello", 42); print([1, true, "x"]); print()"#);
    let (program, errors) = parse_program(&mut tokens.iter().peekable());
    assert!(errors.is_empty());

    let result = evaluator.eval_program(&program, &env);
    assert_eq!(result, Ok(Some(Value::Null)));

    let written = String::from_utf8(buffer.0.borrow().clone()).unwrap();
    assert_eq!(written, "hello\n42\n[1, true, x]\n");
}
