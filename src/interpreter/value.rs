use crate::{
    interpreter::operator::OperatorClass,
    util::num::{bool_to_f64, f64_to_bool},
};

/// A runtime value on the executor's stack, and the final result of an
/// evaluation.
///
/// Literals and identifiers always produce `Number`. Comparison and logical
/// operators produce `Boolean`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue {
    /// A double-precision number.
    Number(f64),
    /// A truth value.
    Boolean(bool),
}

impl From<f64> for TypedValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl TypedValue {
    /// Tags a numeric operator result according to the operator's class.
    ///
    /// Arithmetic results stay numbers; comparison and logical results are
    /// decoded as booleans (non-zero is true).
    ///
    /// # Example
    /// ```
    /// use rpnexpr::interpreter::{operator::OperatorClass, value::TypedValue};
    ///
    /// assert_eq!(TypedValue::tagged(OperatorClass::Arithmetic, 0.0),
    ///            TypedValue::Number(0.0));
    /// assert_eq!(TypedValue::tagged(OperatorClass::Comparison, 1.0),
    ///            TypedValue::Boolean(true));
    /// ```
    #[must_use]
    pub fn tagged(class: OperatorClass, raw: f64) -> Self {
        match class {
            OperatorClass::Arithmetic => Self::Number(raw),
            OperatorClass::Comparison | OperatorClass::Logical => Self::Boolean(f64_to_bool(raw)),
        }
    }

    /// Returns `true` if the value is tagged `Number`.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if the value is tagged `Boolean`.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// The number, if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Boolean(_) => None,
        }
    }

    /// The truth value, if this is a `Boolean`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Number(_) => None,
        }
    }

    /// The shared numeric encoding used by the operator table. Booleans map
    /// to `1.0` and `0.0`.
    #[must_use]
    pub const fn to_f64(self) -> f64 {
        match self {
            Self::Number(n) => n,
            Self::Boolean(b) => bool_to_f64(b),
        }
    }
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
