use crate::{
    ast::{
        ast::{Decl, FnDecl, Param, VarDecl},
        expressions::Expr,
        statements::{
            BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, ForStmt, IfStmt, ReturnStmt, Stmt,
            WhileStmt,
        },
        symbol::Symbol,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Top level: `var TYPE IDENT;` or `func IDENT(params) TYPE { ... }`.
pub fn parse_decl(parser: &mut Parser) -> Result<Decl, Error> {
    match parser.current_token_kind() {
        TokenKind::Var => Ok(Decl::Variable(parse_var_decl(parser)?)),
        TokenKind::Func => Ok(Decl::Function(parse_fn_decl(parser)?)),
        _ => Err(parser.unexpected("expected 'var' or 'func' at top level")),
    }
}

pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDecl, Error> {
    let position = parser.advance().span.start;

    let type_name = parser.expect_detailed(TokenKind::Identifier, "expected type name in variable declaration")?;
    let name = parser.expect_detailed(TokenKind::Identifier, "expected identifier during variable declaration")?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VarDecl {
        name: Symbol::intern(&name.value),
        type_name: Symbol::intern(&type_name.value),
        position,
    })
}

pub fn parse_fn_decl(parser: &mut Parser) -> Result<FnDecl, Error> {
    let position = parser.advance().span.start;

    let name = parser.expect_detailed(TokenKind::Identifier, "expected function name")?;
    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let param_name = parser.expect_detailed(TokenKind::Identifier, "expected parameter name")?;
            let param_type = parser.expect_detailed(TokenKind::Identifier, "expected parameter type")?;
            params.push(Param {
                name: Symbol::intern(&param_name.value),
                type_name: Symbol::intern(&param_type.value),
                position: param_name.span.start,
            });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    let return_type = parser.expect_detailed(TokenKind::Identifier, "expected return type")?;
    let body = parse_block(parser)?;

    Ok(FnDecl {
        name: Symbol::intern(&name.value),
        params,
        return_type: Symbol::intern(&return_type.value),
        body,
        position,
    })
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    if parser.current_token_kind() == TokenKind::Var {
        return Err(parser.unexpected("local declarations must come before statements"));
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

/// `{ (var TYPE IDENT;)* stmt* }`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let position = parser.expect_detailed(TokenKind::OpenCurly, "expected '{' to open a block")?.span.start;

    let mut locals = vec![];
    while parser.current_token_kind() == TokenKind::Var {
        locals.push(parse_var_decl(parser)?);
    }

    let mut body = vec![];
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_stmt(parser)?);
    }

    parser.expect_detailed(TokenKind::CloseCurly, "expected '}' to close a block")?;

    Ok(BlockStmt {
        locals,
        body,
        position,
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            // `else if` becomes an else block holding the nested if
            let nested_position = parser.get_position();
            let nested = parse_if_stmt(parser)?;
            BlockStmt {
                locals: vec![],
                body: vec![nested],
                position: nested_position,
            }
        } else {
            parse_block(parser)?
        }
    } else {
        BlockStmt::empty(parser.get_position())
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        position,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        position,
    }))
}

/// Parses an optional clause that ends right before `terminator`.
fn parse_optional_expr(parser: &mut Parser, terminator: TokenKind) -> Result<Expr, Error> {
    if parser.current_token_kind() == terminator {
        return Ok(Expr::empty(parser.get_position()));
    }

    parse_expr(parser, BindingPower::Default)
}

/// `for [init]; [condition]; [step] { ... }`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    let init = parse_optional_expr(parser, TokenKind::Semicolon)?;
    parser.expect(TokenKind::Semicolon)?;
    let condition = parse_optional_expr(parser, TokenKind::Semicolon)?;
    parser.expect(TokenKind::Semicolon)?;
    let step = parse_optional_expr(parser, TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        step,
        body,
        position,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    let value = parse_optional_expr(parser, TokenKind::Semicolon)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { value, position }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt { position }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Continue(ContinueStmt { position }))
}
