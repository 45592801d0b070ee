use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        executor::binary::eval_binary,
        stack::Stack,
        token::{Token, TokenKind},
        value::TypedValue,
    },
};

/// Result type used by the executor.
///
/// All execution functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

fn copy_f64(value: &f64) -> f64 {
    *value
}

/// Variable bindings for one execution: a name-to-value map in the caller's
/// own value type, plus the function that turns such a value into `f64`.
///
/// Either part may be absent. An expression without identifiers needs
/// neither; an expression with identifiers needs both.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use rpnexpr::interpreter::{executor::{Bindings, execute}, parser::parse, value::TypedValue};
///
/// let values = HashMap::from([("a".to_string(), 10_u32), ("b".to_string(), 20)]);
/// let to_f64 = |v: &u32| f64::from(*v);
/// let bindings = Bindings::new(&values, &to_f64);
///
/// let rpn = parse("a > b").unwrap();
/// assert_eq!(execute(rpn.as_slice(), &bindings).unwrap(), TypedValue::Boolean(false));
/// ```
pub struct Bindings<'a, T> {
    values:    Option<&'a HashMap<String, T>>,
    converter: Option<&'a dyn Fn(&T) -> f64>,
}

impl<T> Default for Bindings<'_, T> {
    fn default() -> Self {
        Self { values:    None,
               converter: None, }
    }
}

impl<'a, T> Bindings<'a, T> {
    /// Binds `values`, converting each looked-up value with `converter`.
    #[must_use]
    pub fn new(values: &'a HashMap<String, T>, converter: &'a dyn Fn(&T) -> f64) -> Self {
        Self { values:    Some(values),
               converter: Some(converter), }
    }

    /// Binds `values` without a converter. Any identifier in the expression
    /// then fails with `MissingConverter`.
    #[must_use]
    pub const fn without_converter(values: &'a HashMap<String, T>) -> Self {
        Self { values:    Some(values),
               converter: None, }
    }

    /// Resolves an identifier to its numeric value.
    ///
    /// # Errors
    /// - `MissingConverter` if no conversion function was supplied.
    /// - `UnknownIdentifier` if `name` is not bound.
    pub fn resolve(&self, name: &str) -> EvalResult<f64> {
        let convert =
            self.converter
                .ok_or_else(|| RuntimeError::MissingConverter { name: name.to_string() })?;
        let value = self.values
                        .and_then(|values| values.get(name))
                        .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })?;
        Ok(convert(value))
    }
}

impl<'a> Bindings<'a, f64> {
    /// No bindings at all, for expressions made only of literals.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Binds values that are already `f64`.
    #[must_use]
    pub fn numeric(values: &'a HashMap<String, f64>) -> Self {
        Self::new(values, &copy_f64)
    }
}

/// Parses a `Number` token's lexeme.
fn parse_number(literal: &str) -> EvalResult<f64> {
    literal.parse()
           .map_err(|_| RuntimeError::InvalidNumericLiteral { literal: literal.to_string() })
}

/// Pops one operand for `operator`; an empty stack means the expression was
/// missing an operand.
fn pop_operand(stack: &mut Stack<TypedValue>, operator: &Token) -> EvalResult<TypedValue> {
    stack.pop()
         .map_err(|_| RuntimeError::StackUnderflow { operator: operator.text.clone() })
}

/// Evaluates an RPN token sequence against `bindings`.
///
/// Literals and identifiers are pushed as numbers. Each operator pops its
/// right operand, then its left operand, checks both against its class and
/// pushes the result. Exactly one value must remain at the end.
///
/// # Errors
/// - `InvalidNumericLiteral` for a number that does not parse as `f64`.
/// - `MissingConverter` / `UnknownIdentifier` from identifier resolution.
/// - `ComputationalOperandError`, `ComparisonOperandError`,
///   `LogicalOperandError` for operand tag mismatches.
/// - `StackUnderflow` when an operator is missing an operand.
/// - `EmptyResult` / `MalformedResult` when zero or several values remain.
/// - `UnexpectedToken` for parentheses or end markers in the sequence.
///
/// # Example
/// ```
/// use rpnexpr::interpreter::{executor::{Bindings, execute}, parser::parse, value::TypedValue};
///
/// let rpn = parse("2 ^ 3 ^ 2").unwrap();
/// let result = execute(rpn.as_slice(), &Bindings::empty()).unwrap();
///
/// assert_eq!(result, TypedValue::Number(512.0));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(tokens = rpn.len()))]
pub fn execute<T>(rpn: &[Token], bindings: &Bindings<'_, T>) -> EvalResult<TypedValue> {
    let mut stack = Stack::with_capacity(rpn.len());

    for token in rpn {
        tracing::trace!(token = %token.text, depth = stack.count(), "executing token");
        match token.kind {
            TokenKind::Number => stack.push(TypedValue::Number(parse_number(&token.text)?)),
            TokenKind::Identifier => stack.push(TypedValue::Number(bindings.resolve(&token.text)?)),
            TokenKind::Operator(op) => {
                let right = pop_operand(&mut stack, token)?;
                let left = pop_operand(&mut stack, token)?;
                stack.push(eval_binary(op, &token.text, left, right)?);
            },
            TokenKind::LParen | TokenKind::RParen | TokenKind::End => {
                return Err(RuntimeError::UnexpectedToken { token: token.kind.to_string() });
            },
        }
    }

    let result = stack.pop().map_err(|_| RuntimeError::EmptyResult)?;
    if !stack.is_empty() {
        return Err(RuntimeError::MalformedResult { remaining: stack.count() + 1 });
    }

    tracing::debug!(%result, "executed rpn");
    Ok(result)
}
