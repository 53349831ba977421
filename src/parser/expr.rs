use crate::{
    ast::{
        expressions::{
            AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr, ExprKind, PrefixExpr,
            PrefixOperator,
        },
        symbol::Symbol,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        };

        let operator_bp = parser.current_binding_power();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();
    let position = token.span.start;

    let kind = match token.kind {
        TokenKind::Number if token.value.contains('.') => match token.value.parse::<f64>() {
            Ok(value) => ExprKind::Float(value),
            Err(_) => {
                return Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, position))
            }
        },
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => ExprKind::Int(value),
            Err(_) => {
                return Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, position))
            }
        },
        TokenKind::Identifier => ExprKind::Object(Symbol::intern(&token.value)),
        TokenKind::String => ExprKind::String(token.value),
        TokenKind::True => ExprKind::Bool(true),
        TokenKind::False => ExprKind::Bool(false),
        _ => return Err(Error::new(ErrorImpl::UnexpectedToken { token: token.value }, position)),
    };

    Ok(Expr::new(kind, position))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let Some(operator) = BinaryOperator::from_token(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { token: operator_token.value },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp)?;
    let position = left.position;

    Ok(Expr::new(
        ExprKind::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }),
        position,
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let Some(operator) = PrefixOperator::from_token(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { token: operator_token.value },
            operator_token.span.start,
        ));
    };

    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::new(
        ExprKind::Prefix(PrefixExpr {
            operator,
            right_expr: Box::new(rhs),
        }),
        operator_token.span.start,
    ))
}

/// `target = value`, right associative.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let ExprKind::Object(target) = left.kind else {
        return Err(parser.unexpected("left side of '=' must be a variable name"));
    };

    parser.advance();
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::new(
        ExprKind::Assignment(AssignmentExpr {
            target,
            value: Box::new(rhs),
        }),
        left.position,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_detailed(TokenKind::CloseParen, "expected ')' to close grouping")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let ExprKind::Object(name) = left.kind else {
        return Err(parser.unexpected("only named functions can be called"));
    };

    parser.advance();

    let mut actuals = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let argument = parse_expr(parser, BindingPower::Default)?;
            let position = argument.position;
            actuals.push(Expr::new(ExprKind::Actual(Box::new(argument)), position));

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_detailed(TokenKind::CloseParen, "expected ')' after call arguments")?;

    Ok(Expr::new(ExprKind::Call(CallExpr { name, actuals }), left.position))
}
