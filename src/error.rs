/// Parsing errors.
///
/// Defines the errors raised while scanning the expression text and while
/// reordering tokens into Reverse Polish Notation: unknown symbols and
/// unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing an RPN
/// sequence: bad literals, unresolved identifiers, operand type mismatches and
/// stack underflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the full parse-then-execute pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tokenizing or parsing failed.
    Parse(ParseError),
    /// Executing the RPN sequence failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
