#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or converting an
/// expression to Reverse Polish Notation.
pub enum ParseError {
    /// The scanner found a character sequence that is not a number,
    /// identifier, operator or parenthesis.
    UnrecognizedSymbol {
        /// The offending source text.
        symbol:   String,
        /// Byte offset of the symbol in the normalized expression.
        position: usize,
    },
    /// A `)` had no matching `(`, or a `(` was never closed.
    UnbalancedParentheses {
        /// Byte offset of the token that exposed the imbalance.
        position: usize,
    },
    /// An operator token has no entry in the operator table.
    UnrecognizedOperator {
        /// The operator lexeme.
        operator: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSymbol { symbol, position } => write!(f,
                                                                    "Error at position {position}: Unrecognized symbol '{symbol}'."),
            Self::UnbalancedParentheses { position } => {
                write!(f, "Error at position {position}: Unbalanced parentheses.")
            },
            Self::UnrecognizedOperator { operator } => {
                write!(f, "Error: Operator '{operator}' has no precedence entry.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
