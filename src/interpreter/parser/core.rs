use crate::{
    error::ParseError,
    interpreter::{
        lexer::Tokenizer,
        operator::{Associativity, OpKind, lookup},
        parser::rpn::Rpn,
        stack::Stack,
        token::{Token, TokenKind},
    },
    util::text::strip_whitespace,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix expression to Reverse Polish Notation.
///
/// The parser owns the normalized (whitespace-free) expression text. Each
/// call to [`Parser::parse`] tokenizes it afresh with its own scratch stack,
/// so repeated calls always produce the same sequence.
#[derive(Debug, Clone)]
pub struct Parser {
    source: String,
}

impl Parser {
    /// Creates a parser, stripping all whitespace from `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { source: strip_whitespace(source) }
    }

    /// The normalized expression text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Runs the shunting-yard algorithm over the expression.
    ///
    /// - Numbers and identifiers go straight to the output.
    /// - `(` is pushed on the scratch stack.
    /// - `)` pops operators to the output until the matching `(`, which is
    ///   discarded.
    /// - An operator first pops every stacked operator that binds tighter, or
    ///   equally tight when the incoming operator is left-associative, then is
    ///   pushed itself.
    /// - At the end of input the remaining operators are popped to the output.
    ///
    /// # Errors
    /// - `UnrecognizedSymbol` if the tokenizer meets an unknown character.
    /// - `UnbalancedParentheses` for a `)` without a `(`, or a `(` that is
    ///   never closed.
    /// - `UnrecognizedOperator` if an operator has no table entry.
    ///
    /// # Example
    /// ```
    /// use rpnexpr::interpreter::parser::Parser;
    ///
    /// let rpn = Parser::new("2 ^ 3 ^ 2").parse().unwrap();
    /// assert_eq!(rpn.to_string(), "2 3 2 ^ ^");
    ///
    /// let rpn = Parser::new("(1 + 2) * 3").parse().unwrap();
    /// assert_eq!(rpn.to_string(), "1 2 + 3 *");
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(source = %self.source))]
    pub fn parse(&self) -> ParseResult<Rpn> {
        let mut scratch = Stack::new();
        let mut output = Vec::with_capacity(self.source.len());

        for token in Tokenizer::new(&self.source) {
            let token = token?;
            match token.kind {
                TokenKind::Number | TokenKind::Identifier => output.push(token),
                TokenKind::LParen => scratch.push(token),
                TokenKind::RParen => close_group(&mut scratch, &mut output, token.position)?,
                TokenKind::Operator(op) => push_operator(&mut scratch, &mut output, op, token)?,
                TokenKind::End => break,
            }
        }

        while let Ok(token) = scratch.pop() {
            if token.kind == TokenKind::LParen {
                return Err(ParseError::UnbalancedParentheses { position: token.position });
            }
            output.push(token);
        }

        let rpn = Rpn::from(output);
        tracing::debug!(%rpn, "converted to rpn");
        Ok(rpn)
    }
}

/// Parses `text` into an RPN sequence.
///
/// Whitespace in `text` is stripped first; already-normalized text passes
/// through unchanged.
///
/// # Errors
/// See [`Parser::parse`].
///
/// # Example
/// ```
/// use rpnexpr::interpreter::parser::parse;
///
/// assert_eq!(parse("1 + 2 * 3").unwrap().to_string(), "1 2 3 * +");
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(text: &str) -> ParseResult<Rpn> {
    Parser::new(text).parse()
}

/// Pops operators into `output` until the `(` opening the current group,
/// which is discarded.
fn close_group(scratch: &mut Stack<Token>,
               output: &mut Vec<Token>,
               position: usize)
               -> ParseResult<()> {
    loop {
        let top = scratch.pop()
                         .map_err(|_| ParseError::UnbalancedParentheses { position })?;
        if top.kind == TokenKind::LParen {
            return Ok(());
        }
        output.push(top);
    }
}

fn precedence_of(op: OpKind, token: &Token) -> ParseResult<u8> {
    lookup(op).map(|spec| spec.precedence)
              .ok_or_else(|| ParseError::UnrecognizedOperator { operator: token.text.clone() })
}

/// Resolves `incoming` against the operators already waiting on the scratch
/// stack, then pushes it.
///
/// Each stacked operator is popped and either moved to the output or, once
/// one no longer yields to `incoming`, pushed back and the scan stops. A `(`
/// never yields.
fn push_operator(scratch: &mut Stack<Token>,
                 output: &mut Vec<Token>,
                 incoming: OpKind,
                 token: Token)
                 -> ParseResult<()> {
    let spec = lookup(incoming).ok_or_else(|| {
                                   ParseError::UnrecognizedOperator { operator: token.text.clone() }
                               })?;
    let precedence = spec.precedence;
    let left_assoc = spec.associativity == Associativity::Left;

    while let Ok(top) = scratch.pop() {
        let yields = match top.kind {
            TokenKind::Operator(stacked) => {
                let stacked_precedence = precedence_of(stacked, &top)?;
                stacked_precedence > precedence || (stacked_precedence == precedence && left_assoc)
            },
            _ => false,
        };
        if !yields {
            scratch.push(top);
            break;
        }
        output.push(top);
    }

    scratch.push(token);
    Ok(())
}
