/// Shunting-yard conversion from infix tokens to Reverse Polish Notation.
///
/// Holds the [`Parser`] entry point, the result alias shared by the lexer and
/// parser, and the operator scratch-stack discipline for precedence and
/// associativity.
pub mod core;

/// The RPN token sequence produced by the parser.
///
/// An owned, ordered list of tokens with no parentheses. Displays as
/// space-separated lexemes for diagnostics.
pub mod rpn;

pub use self::{
    core::{ParseResult, Parser, parse},
    rpn::Rpn,
};
