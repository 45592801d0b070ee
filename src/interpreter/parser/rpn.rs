use crate::interpreter::token::Token;

/// An ordered token sequence in Reverse Polish Notation.
///
/// Contains only literals and operators. For a balanced, complete source
/// expression, running it through the executor leaves exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rpn {
    tokens: Vec<Token>,
}

impl Rpn {
    /// The tokens in evaluation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates the tokens in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` for an empty sequence, as produced by blank input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consumes the sequence, returning the underlying tokens.
    #[must_use]
    pub fn into_inner(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for Rpn {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl AsRef<[Token]> for Rpn {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

impl IntoIterator for Rpn {
    type IntoIter = std::vec::IntoIter<Token>;
    type Item = Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rpn {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl std::fmt::Display for Rpn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
