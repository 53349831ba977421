use crate::{errors::errors::ErrorImpl, Position};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string())
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("var func return if else while for break continue true false"),
        vec![
            TokenKind::Var,
            TokenKind::Func,
            TokenKind::Return,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _under Int printf".to_string()).unwrap();

    assert!(tokens[..5].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_under");
    assert_eq!(tokens[3].value, "Int");
    assert_eq!(tokens[4].value, "printf");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""a\tb\n" "say \"hi\"""#.to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\tb\n");
    assert_eq!(tokens[1].value, "say \"hi\"");
}

#[test]
fn test_tokenize_longest_operators_first() {
    assert_eq!(
        kinds("== = != ! <= < >= > && & || | ^ ~"),
        vec![
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::Or,
            TokenKind::Pipe,
            TokenKind::Caret,
            TokenKind::Tilde,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    let source = "x // trailing\n/* block\n comment */ y / z";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_tracks_lines_and_columns() {
    let tokens = tokenize("var Int x;\n  x = 1;".to_string()).unwrap();

    assert_eq!(tokens[0].span.start, Position::new(1, 1));
    assert_eq!(tokens[2].span.start, Position::new(1, 9));
    assert_eq!(tokens[4].span.start, Position::new(2, 3));
    assert_eq!(tokens[5].span.start, Position::new(2, 5));
}

#[test]
fn test_tokenize_lines_after_block_comment() {
    let tokens = tokenize("/* one\ntwo\n*/ z".to_string()).unwrap();

    assert_eq!(tokens[0].value, "z");
    assert_eq!(tokens[0].span.start, Position::new(3, 4));
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("var Int #;".to_string()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "#".to_string()
        }
    );
    assert_eq!(error.get_position(), Some(Position::new(1, 9)));
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}
