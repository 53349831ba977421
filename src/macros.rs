//! Token construction shortcuts used by the lexer's pattern table.

/// `MK_TOKEN!(kind, value, span)` builds a `Token`.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Handler for a pattern that always matches the literal `$value` and emits
/// one token of `$kind` for it.
///
/// ```ignore
/// pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _matched: &str| {
            let start = lexer.position();
            lexer.advance_n($value);
            let end = lexer.position();
            lexer.push($crate::MK_TOKEN!($kind, String::from($value), $crate::Span { start, end }));
        }
    };
}
