use crate::{
    ast::{
        ast::{Decl, Program},
        expressions::{BinaryOperator, ExprKind, PrefixOperator},
        statements::Stmt,
        symbol::Symbol,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string()).unwrap();
    parse(tokens)
}

/// Parses `func main() Void { <body> }` and returns the body statements.
fn parse_body(body: &str) -> Vec<Stmt> {
    let program = parse_source(&format!("func main() Void {{ {} }}", body)).unwrap();
    match program.decls.into_iter().next() {
        Some(Decl::Function(function)) => function.body.body,
        other => panic!("expected a function, got {:?}", other),
    }
}

fn expression(body: &str) -> ExprKind {
    match parse_body(body).into_iter().next() {
        Some(Stmt::Expression(stmt)) => stmt.expression.kind,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_global_and_function() {
    let program = parse_source("var Int count;\nfunc add(a Int, b Float) Int { var Int y; return a; }").unwrap();

    assert_eq!(program.decls.len(), 2);

    let Decl::Variable(global) = &program.decls[0] else {
        panic!("expected a variable");
    };
    assert_eq!(global.name, Symbol::intern("count"));
    assert_eq!(global.type_name, Symbol::INT);
    assert_eq!(global.position.line, 1);

    let Decl::Function(function) = &program.decls[1] else {
        panic!("expected a function");
    };
    assert_eq!(function.name, Symbol::intern("add"));
    assert_eq!(function.return_type, Symbol::INT);
    assert_eq!(function.params.len(), 2);
    assert_eq!(function.params[1].name, Symbol::intern("b"));
    assert_eq!(function.params[1].type_name, Symbol::FLOAT);
    assert_eq!(function.body.locals.len(), 1);
    assert_eq!(function.body.body.len(), 1);
    assert_eq!(function.position.line, 2);
}

#[test]
fn test_parse_precedence() {
    // a + b * c == d  =>  (a + (b * c)) == d
    let ExprKind::Binary(equality) = expression("a + b * c == d;") else {
        panic!("expected binary");
    };
    assert_eq!(equality.operator, BinaryOperator::Eq);

    let ExprKind::Binary(sum) = equality.left.kind else {
        panic!("expected binary");
    };
    assert_eq!(sum.operator, BinaryOperator::Add);
    assert!(matches!(
        sum.right.kind,
        ExprKind::Binary(ref product) if product.operator == BinaryOperator::Mul
    ));
}

#[test]
fn test_parse_logical_binds_looser_than_bitwise() {
    let ExprKind::Binary(or) = expression("a || b & c;") else {
        panic!("expected binary");
    };
    assert_eq!(or.operator, BinaryOperator::Or);
    assert!(matches!(
        or.right.kind,
        ExprKind::Binary(ref and) if and.operator == BinaryOperator::BitAnd
    ));
}

#[test]
fn test_parse_binary_is_left_associative() {
    let ExprKind::Binary(outer) = expression("a - b - c;") else {
        panic!("expected binary");
    };
    assert!(matches!(outer.left.kind, ExprKind::Binary(_)));
    assert!(matches!(outer.right.kind, ExprKind::Object(_)));
}

#[test]
fn test_parse_assignment_is_right_associative() {
    let ExprKind::Assignment(outer) = expression("a = b = 1;") else {
        panic!("expected assignment");
    };
    assert_eq!(outer.target, Symbol::intern("a"));

    let ExprKind::Assignment(inner) = outer.value.kind else {
        panic!("expected nested assignment");
    };
    assert_eq!(inner.target, Symbol::intern("b"));
    assert!(matches!(inner.value.kind, ExprKind::Int(1)));
}

#[test]
fn test_parse_prefix_binds_tighter_than_binary() {
    let ExprKind::Binary(product) = expression("-a * ~b;") else {
        panic!("expected binary");
    };
    assert!(matches!(
        product.left.kind,
        ExprKind::Prefix(ref prefix) if prefix.operator == PrefixOperator::Neg
    ));
    assert!(matches!(
        product.right.kind,
        ExprKind::Prefix(ref prefix) if prefix.operator == PrefixOperator::BitNot
    ));
}

#[test]
fn test_parse_call_wraps_actuals() {
    let ExprKind::Call(call) = expression("printf(\"%d\", 1 + 2, f());") else {
        panic!("expected call");
    };
    assert_eq!(call.name, Symbol::PRINTF);
    assert_eq!(call.actuals.len(), 3);
    assert!(call
        .actuals
        .iter()
        .all(|actual| matches!(actual.kind, ExprKind::Actual(_))));
}

#[test]
fn test_parse_literals() {
    assert!(matches!(expression("1.5;"), ExprKind::Float(value) if value == 1.5));
    assert!(matches!(expression("7;"), ExprKind::Int(7)));
    assert!(matches!(expression("true;"), ExprKind::Bool(true)));
    assert!(matches!(expression("(false);"), ExprKind::Bool(false)));
}

#[test]
fn test_parse_statements() {
    let body = parse_body(
        "if a { } else if b { } else { }
         while a { break; continue; }
         for ; ; { }
         for i = 0; i < 3; i = i + 1 { }
         return;
         { }",
    );

    assert_eq!(body.len(), 6);

    let Stmt::If(if_stmt) = &body[0] else {
        panic!("expected if");
    };
    assert!(matches!(if_stmt.else_body.body.as_slice(), [Stmt::If(_)]));

    let Stmt::While(while_stmt) = &body[1] else {
        panic!("expected while");
    };
    assert!(matches!(while_stmt.body.body.as_slice(), [Stmt::Break(_), Stmt::Continue(_)]));

    let Stmt::For(empty_for) = &body[2] else {
        panic!("expected for");
    };
    assert!(empty_for.init.is_empty() && empty_for.condition.is_empty() && empty_for.step.is_empty());

    let Stmt::For(full_for) = &body[3] else {
        panic!("expected for");
    };
    assert!(!full_for.step.is_empty());

    let Stmt::Return(return_stmt) = &body[4] else {
        panic!("expected return");
    };
    assert!(return_stmt.value.is_empty());
    assert!(matches!(body[5], Stmt::Block(_)));
}

#[test]
fn test_parse_if_without_else_has_empty_else_block() {
    let body = parse_body("if a { b; }");
    let Stmt::If(if_stmt) = &body[0] else {
        panic!("expected if");
    };
    assert!(if_stmt.else_body.body.is_empty());
    assert_eq!(if_stmt.then_body.body.len(), 1);
}

#[test]
fn test_parse_errors() {
    let error = parse_source("func main() Void { x = ; }").unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedToken { .. }));

    let error = parse_source("func main() Void { 1 = 2; }").unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedTokenDetailed { .. }));

    let error = parse_source("func main() Void { x; var Int y; }").unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedTokenDetailed { .. }));

    let error = parse_source("x;").unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedTokenDetailed { .. }));

    let error = parse_source("func main() Void { x = 99999999999999999999; }").unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::NumberParseError { .. }));

    let error = parse_source("func main() Void { ").unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedTokenDetailed { .. }));
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(parse_source("").unwrap(), Program::default());
}
