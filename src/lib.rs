#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_source_line() {
        let source = "Hello, world!\nsecond\r\n\n    Testing { }\n";
        assert_eq!(super::get_source_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_source_line(source, 2), Some("second"));
        assert_eq!(super::get_source_line(source, 3), Some(""));
        assert_eq!(super::get_source_line(source, 4), Some("    Testing { }"));
        assert_eq!(super::get_source_line(source, 0), None);
        assert_eq!(super::get_source_line(source, 9), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        use crate::errors::errors::{Error, ErrorImpl};
        use crate::Position;

        let source = "var Int x;\nvar Int #;\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "#".to_string(),
            },
            Position::new(2, 9),
        );

        let rendered = super::render_error(&error, "test.sl", source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: UnrecognisedToken (unrecognised token: \"#\")");
        assert_eq!(lines[1], "-> test.sl:2:9");
        assert_eq!(lines[3], "2 | var Int #;");
        assert_eq!(lines[4], "  | --------^");
    }
}

/// Renders a front-end error with the offending source line and a caret.
pub fn render_error(error: &Error, file: &str, source: &str) -> String {
    /*
        Error: name (message)
        -> final.sl:20:9
          |
        20 | var Int #;
          | --------^
    */

    let mut out = format!("Error: {} ({})\n", error.get_error_name(), error.message());

    let Some(position) = error.get_position() else {
        out.push_str(&format!("-> {}\n", file));
        return out;
    };

    out.push_str(&format!("-> {}:{}\n", file, position));

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_source_line(source, position.line).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}
