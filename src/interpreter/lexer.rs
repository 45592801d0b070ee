use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        operator::OpKind,
        parser::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Raw lexemes recognized by the scanner.
///
/// Whitespace is not a lexeme: the expression text is normalized before it
/// reaches the scanner, so any whitespace left over is an unrecognized
/// symbol.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, `7` or `2.1e-10`.
    /// Prefixed integers (`0x1F`, `0o17`, `0b101`) are scanned as numbers
    /// too, but only decimal forms evaluate.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"0[bB][01_]+")]
    Number,
    /// Identifier tokens; variable names such as `x` or `max_load`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `||` or `|`
    #[token("||")]
    #[token("|")]
    Or,
    /// `&&` or `&`
    #[token("&&")]
    #[token("&")]
    And,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme {
    /// Maps a raw lexeme to its semantic token kind.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Number => TokenKind::Number,
            Self::Identifier => TokenKind::Identifier,
            Self::Plus => TokenKind::Operator(OpKind::Add),
            Self::Minus => TokenKind::Operator(OpKind::Sub),
            Self::Star => TokenKind::Operator(OpKind::Mul),
            Self::Slash => TokenKind::Operator(OpKind::Div),
            Self::Caret => TokenKind::Operator(OpKind::Pow),
            Self::EqualEqual => TokenKind::Operator(OpKind::Equal),
            Self::BangEqual => TokenKind::Operator(OpKind::NotEqual),
            Self::LessEqual => TokenKind::Operator(OpKind::LessEqual),
            Self::GreaterEqual => TokenKind::Operator(OpKind::GreaterEqual),
            Self::Less => TokenKind::Operator(OpKind::Less),
            Self::Greater => TokenKind::Operator(OpKind::Greater),
            Self::Or => TokenKind::Operator(OpKind::Or),
            Self::And => TokenKind::Operator(OpKind::And),
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

/// Lazy, forward-only token stream over normalized expression text.
///
/// Yields every lexeme as a [`Token`], then exactly one `End` token, then
/// `None`. The first unrecognized symbol is yielded as an error and also ends
/// the stream.
///
/// # Example
/// ```
/// use rpnexpr::interpreter::{lexer::Tokenizer, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = Tokenizer::new("a>1").map(|t| t.unwrap().kind)
///                                                  .collect();
///
/// assert_eq!(kinds.len(), 4);
/// assert_eq!(kinds[3], TokenKind::End);
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Lexeme>,
    peeked:   Option<Option<ParseResult<Token>>>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`, which must already be stripped of
    /// whitespace.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Lexeme::lexer(source),
               peeked:   None,
               finished: false, }
    }

    /// Returns the next item without consuming it.
    pub fn peek(&mut self) -> Option<&ParseResult<Token>> {
        if self.peeked.is_none() {
            let next = self.scan();
            self.peeked = Some(next);
        }
        self.peeked.as_ref().and_then(Option::as_ref)
    }

    fn scan(&mut self) -> Option<ParseResult<Token>> {
        if self.finished {
            return None;
        }

        let position = self.lexer.span().end;
        match self.lexer.next() {
            Some(Ok(lexeme)) => {
                Some(Ok(Token::new(lexeme.kind(), self.lexer.slice(), self.lexer.span().start)))
            },
            Some(Err(())) => {
                self.finished = true;
                Some(Err(ParseError::UnrecognizedSymbol { symbol:   self.lexer
                                                                        .slice()
                                                                        .to_string(),
                                                          position: self.lexer.span().start, }))
            },
            None => {
                self.finished = true;
                Some(Ok(Token::new(TokenKind::End, "", position)))
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(item) => item,
            None => self.scan(),
        }
    }
}
