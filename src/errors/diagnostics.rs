use crate::Position;

use super::errors::{Error, ErrorImpl};

/// Accumulates diagnostics in the order they are found.
///
/// Reporting never stops analysis; the driver decides pass/fail once the
/// whole program has been walked.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn report(&mut self, error: Error) {
        log::debug!("diagnostic: {}", error);
        self.errors.push(error);
    }

    pub fn error_at(&mut self, error_impl: ErrorImpl, position: Position) {
        self.report(Error::new(error_impl, position));
    }

    pub fn error(&mut self, error_impl: ErrorImpl) {
        self.report(Error::unpositioned(error_impl));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostic lines as they are printed: `<line>: <message>` or `<message>`.
    pub fn render(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }
}
