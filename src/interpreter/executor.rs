/// The RPN stack machine.
///
/// Holds the caller's variable [`Bindings`](core::Bindings), the evaluation
/// loop, and the end-of-run result checks.
pub mod core;

/// Binary operator evaluation.
///
/// Enforces the operand tag each operator class requires, applies the
/// operator's numeric function and re-tags the result.
pub mod binary;

pub use self::core::{Bindings, EvalResult, execute};
