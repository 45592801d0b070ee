use crate::interpreter::operator::OpKind;

/// The semantic category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal such as `42` or `2.5e-3`.
    Number,
    /// Variable name, resolved against the caller's bindings at execution.
    Identifier,
    /// One of the binary operators.
    Operator(OpKind),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Emitted exactly once, after the last lexeme.
    End,
}

impl TokenKind {
    /// Returns `true` for `Number` and `Identifier`.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Number | Self::Identifier)
    }

    /// Returns `true` for operator tokens.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "NUMBER"),
            Self::Identifier => write!(f, "IDENT"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::End => write!(f, "EOF"),
        }
    }
}

/// A lexical token: its kind plus the exact source lexeme.
///
/// Tokens are immutable once produced by the tokenizer. The parser only
/// reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Semantic category.
    pub kind:     TokenKind,
    /// Exact source text. Empty for `End`.
    pub text:     String,
    /// Byte offset of the lexeme in the normalized expression.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
