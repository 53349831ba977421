//! End-to-end tests: source text through tokenization, parsing and the
//! semantic pass.

use pretty_assertions::assert_eq;
use semant::{
    ast::{symbol::Symbol, types::Type},
    errors::errors::SemantError,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::type_checker::{semant, type_check},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rendered diagnostics for `source`, or the rendered front-end error.
fn check(source: &str) -> Vec<String> {
    init_logger();

    let tokens = match tokenize(source.to_string()) {
        Ok(tokens) => tokens,
        Err(error) => return vec![render_error(&error, "test.sl", source)],
    };
    let mut program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => return vec![render_error(&error, "test.sl", source)],
    };

    type_check(&mut program, Symbol::MAIN)
        .unwrap()
        .diagnostics
        .render()
}

const FIBONACCI: &str = r#"
/* iterative and recursive fibonacci */
var Int calls;

func fib(n Int) Int {
    calls = calls + 1;
    if n < 2 {
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

func fibLoop(n Int) Int {
    var Int a;
    var Int b;
    var Int i;
    var Int t;
    a = 0;
    b = 1;
    for i = 0; i < n; i = i + 1 {
        t = a + b;
        a = b;
        b = t;
    }
    return a;
}

func main() Void {
    var Int n;
    var Float average;
    n = 10;
    if fib(n) == fibLoop(n) && calls > 0 {
        printf("fib(%d) = %d\n", n, fib(n));
    } else if calls == 0 {
        printf("never called\n");
    } else {
        printf("mismatch\n");
    }
    average = calls / 2.0;
    while true {
        if average > 1.5 ^ false {
            break;
        }
        average = average - 0.5;
    }
}
"#;

#[test]
fn test_valid_program_passes() {
    assert_eq!(check(FIBONACCI), Vec::<String>::new());

    let mut program = parse(tokenize(FIBONACCI.to_string()).unwrap()).unwrap();
    assert!(semant(&mut program, Symbol::MAIN).is_ok());
}

#[test]
fn test_many_independent_errors_in_one_run() {
    let source = "\
var Int total;
var String total;
func printf(s String) Void { }
func sum(a Int, b Int) Int {
    return a + b;
}
func sum() Void { }
func main(argc Int) Int {
    var Bool done;
    var Int done;
    done = 3;
    total = sum(1, 2, 3);
    total = sum(1, \"two\");
    missing = 1;
    printf(total);
    if total { }
    return \"oops\";
}";

    assert_eq!(
        check(source),
        vec![
            "3: Function printf cannot be redefined.",
            "7: Function sum was previously defined.",
            "8: Main function main should not have any parameters.",
            "8: Main function main should have return type Void.",
            "2: var total was previously defined.",
            "10: var done was previously defined in this scope.",
            "11: Right value must have type Bool, got Int.",
            "12: Function sum called with wrong number of arguments: expected 2, received 3.",
            "13: Function sum, the 2 parameter should be Int but provided a String.",
            "14: Left value missing has not been defined.",
            "15: The first argument of printf should be String, got Int.",
            "16: Predicate of 'if' does not have type Bool.",
            "17: Function main should return Int, but returns String.",
        ]
    );
}

#[test]
fn test_halted_verdict_carries_diagnostics() {
    let mut program = parse(tokenize("func main() Void { x = 1; }".to_string()).unwrap()).unwrap();

    let error = semant(&mut program, Symbol::MAIN).unwrap_err();
    assert_eq!(error.to_string(), "Compilation halted due to static semantic errors.");

    let SemantError::Halted(diagnostics) = error else {
        panic!("expected halted verdict");
    };
    assert_eq!(diagnostics.render(), vec!["1: Left value x has not been defined."]);
}

#[test]
fn test_typed_ast_after_success() {
    let source = "func half(n Int) Float { return n / 2.0; }\nfunc main() Void { half(3); }";
    let mut program = parse(tokenize(source.to_string()).unwrap()).unwrap();
    let type_checker = type_check(&mut program, Symbol::MAIN).unwrap();
    assert!(type_checker.diagnostics.is_empty());

    let rendered = format!("{:?}", program);
    assert!(rendered.contains("ty: Some(Float)"));
    assert!(!rendered.contains("ty: None"));
    assert_eq!(Type::from_symbol(Symbol::intern("Float")), Some(Type::Float));
}

#[test]
fn test_front_end_errors_render_with_caret() {
    let rendered = check("func main() Void {\n    var Int #;\n}");
    assert_eq!(
        rendered,
        vec![
            "Error: UnrecognisedToken (unrecognised token: \"#\")\n\
             -> test.sl:2:13\n  \
             |\n\
             2 | var Int #;\n  \
             | --------^\n"
        ]
    );

    let rendered = check("func main() Void { x = ; }");
    assert!(rendered[0].starts_with("Error: UnexpectedToken (unexpected token: \";\")"));
}
