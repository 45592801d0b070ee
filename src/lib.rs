//! # rpnexpr
//!
//! rpnexpr converts infix boolean/arithmetic expressions into Reverse Polish
//! Notation with the shunting-yard algorithm, then evaluates the RPN on a
//! small typed stack machine against caller-supplied variable bindings.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use rpnexpr::{Bindings, TypedValue, evaluate};
//!
//! let values = HashMap::from([("a".to_string(), 10.0), ("b".to_string(), 20.0)]);
//! let result = evaluate("a * 2 == b && b > 5", &Bindings::numeric(&values)).unwrap();
//!
//! assert_eq!(result, TypedValue::Boolean(true));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting to RPN, or executing. Errors abort the current call and are
/// returned to the caller; nothing is retried or recovered internally.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, executor).
/// - Carries the offending lexeme or source position for context.
/// - Wraps both phases in one `Error` for the full pipeline.
pub mod error;
/// Coordinates tokenizing, RPN conversion and execution.
///
/// This module ties together the lexer, the shunting-yard parser, the
/// operator table, the generic stack and the executor.
///
/// # Responsibilities
/// - Produces tokens from normalized expression text.
/// - Reorders them into RPN according to precedence and associativity.
/// - Evaluates RPN with strict operand typing per operator class.
pub mod interpreter;
/// General helpers shared by several phases.
///
/// # Responsibilities
/// - Encode and decode booleans in the operator table's numeric form.
/// - Normalize expression text before tokenization.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        executor::{Bindings, execute},
        parser::{Rpn, parse},
        value::TypedValue,
    },
};

/// Converts an expression to its RPN sequence.
///
/// # Errors
/// Returns a `ParseError` for unknown symbols or unbalanced parentheses.
///
/// # Examples
/// ```
/// use rpnexpr::to_rpn;
///
/// assert_eq!(to_rpn("a > b || c").unwrap().to_string(), "a b > c ||");
/// assert!(to_rpn("a $ b").is_err());
/// ```
pub fn to_rpn(source: &str) -> Result<Rpn, error::ParseError> {
    parse(source)
}

/// Parses and executes `source` in one step.
///
/// # Errors
/// Returns [`Error::Parse`] if the expression cannot be converted to RPN and
/// [`Error::Runtime`] if executing it fails.
///
/// # Examples
/// ```
/// use rpnexpr::{Bindings, Error, TypedValue, error::RuntimeError, evaluate};
///
/// // Multiplication binds tighter than addition.
/// let res = evaluate("1 + 2 * 3", &Bindings::empty());
/// assert_eq!(res.unwrap(), TypedValue::Number(7.0));
///
/// // A comparison result cannot feed an arithmetic operator.
/// let res = evaluate("(1 > 2) + 1", &Bindings::empty());
/// assert!(matches!(res,
///                  Err(Error::Runtime(RuntimeError::ComputationalOperandError { .. }))));
/// ```
pub fn evaluate<T>(source: &str, bindings: &Bindings<'_, T>) -> Result<TypedValue, Error> {
    let rpn = parse(source)?;
    Ok(execute(rpn.as_slice(), bindings)?)
}
