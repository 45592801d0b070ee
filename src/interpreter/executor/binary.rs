use crate::{
    error::RuntimeError,
    interpreter::{
        executor::core::EvalResult,
        operator::{OpKind, OperatorClass},
        value::TypedValue,
    },
};

/// Returns `true` when both operands carry the tag `class` requires:
/// `Number` for arithmetic and comparison, `Boolean` for logical.
#[must_use]
pub const fn operands_match(class: OperatorClass, left: &TypedValue, right: &TypedValue) -> bool {
    match class {
        OperatorClass::Arithmetic | OperatorClass::Comparison => {
            left.is_number() && right.is_number()
        },
        OperatorClass::Logical => left.is_boolean() && right.is_boolean(),
    }
}

/// Evaluates `left <op> right`.
///
/// The operands are type-checked against the operator's class, passed to the
/// operator's numeric function, and the result is tagged `Number` for
/// arithmetic or `Boolean` for comparison and logical operators.
///
/// # Parameters
/// - `op`: The operator.
/// - `symbol`: The operator's source lexeme, used in error messages.
/// - `left`: Left operand (popped second).
/// - `right`: Right operand (popped first).
///
/// # Errors
/// The class-specific operand error when a tag does not match.
///
/// # Example
/// ```
/// use rpnexpr::{
///     error::RuntimeError,
///     interpreter::{executor::binary::eval_binary, operator::OpKind, value::TypedValue},
/// };
///
/// let sum = eval_binary(OpKind::Sub, "-", 7.0.into(), 2.0.into()).unwrap();
/// assert_eq!(sum, TypedValue::Number(5.0));
///
/// let err = eval_binary(OpKind::Add, "+", true.into(), 1.0.into()).unwrap_err();
/// assert_eq!(err,
///            RuntimeError::ComputationalOperandError { operator: "+".to_string() });
/// ```
pub fn eval_binary(op: OpKind,
                   symbol: &str,
                   left: TypedValue,
                   right: TypedValue)
                   -> EvalResult<TypedValue> {
    let class = op.class();
    if !operands_match(class, &left, &right) {
        tracing::trace!(%class, symbol, %left, %right, "operand tags do not match");
        return Err(RuntimeError::operand_mismatch(class, symbol));
    }

    let raw = op.apply(left.to_f64(), right.to_f64());
    Ok(TypedValue::tagged(class, raw))
}
