/// Runs Reverse Polish Notation sequences.
///
/// This module implements a small typed stack machine: literals and bound
/// identifiers are pushed as numbers, operators pop two operands, check their
/// tags against the operator's class and push a tagged result.
///
/// # Responsibilities
/// - Resolves identifiers through caller-supplied bindings and conversion.
/// - Enforces numeric operands for arithmetic and comparison operators, and
///   boolean operands for logical operators.
/// - Reports underflow and leftover values instead of guessing a result.
pub mod executor;
/// Turns expression text into tokens.
///
/// Scans numbers, identifiers, operators and parentheses with `logos` and
/// exposes them as a lazy stream terminated by a single end marker.
pub mod lexer;
/// Operator metadata.
///
/// Declares the closed set of binary operators together with one immutable,
/// process-wide table of their precedence, associativity, class and numeric
/// function.
pub mod operator;
/// Reorders infix tokens into Reverse Polish Notation.
///
/// Implements the shunting-yard algorithm on top of the tokenizer, honouring
/// precedence and associativity and rejecting unbalanced parentheses.
pub mod parser;
/// The generic last-in-first-out container used by the parser and executor.
pub mod stack;
/// Token kinds and the token value type.
pub mod token;
/// Typed runtime values produced by the executor.
pub mod value;
