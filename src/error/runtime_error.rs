use crate::interpreter::operator::OperatorClass;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing an RPN sequence.
pub enum RuntimeError {
    /// A `Number` token's text could not be parsed as `f64`.
    InvalidNumericLiteral {
        /// The literal text.
        literal: String,
    },
    /// An identifier has no entry in the variable bindings.
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
    },
    /// An identifier was encountered but no conversion function was supplied.
    MissingConverter {
        /// The name of the identifier that needed converting.
        name: String,
    },
    /// An arithmetic operator received a non-numeric operand.
    ComputationalOperandError {
        /// The operator lexeme.
        operator: String,
    },
    /// A comparison operator received a non-numeric operand.
    ComparisonOperandError {
        /// The operator lexeme.
        operator: String,
    },
    /// A logical operator received a non-boolean operand.
    LogicalOperandError {
        /// The operator lexeme.
        operator: String,
    },
    /// An operator tried to pop an operand from an empty stack.
    StackUnderflow {
        /// The operator lexeme.
        operator: String,
    },
    /// Execution finished with nothing left on the stack.
    EmptyResult,
    /// Execution finished with more than one value left on the stack.
    MalformedResult {
        /// How many values were left.
        remaining: usize,
    },
    /// A token that never appears in RPN (parenthesis or end marker) was found.
    UnexpectedToken {
        /// The token text.
        token: String,
    },
}

impl RuntimeError {
    /// Builds the operand-type error matching an operator's class.
    ///
    /// # Example
    /// ```
    /// use rpnexpr::{error::RuntimeError, interpreter::operator::OperatorClass};
    ///
    /// let err = RuntimeError::operand_mismatch(OperatorClass::Logical, "&&");
    /// assert_eq!(err,
    ///            RuntimeError::LogicalOperandError { operator: "&&".to_string() });
    /// ```
    #[must_use]
    pub fn operand_mismatch(class: OperatorClass, operator: &str) -> Self {
        let operator = operator.to_string();
        match class {
            OperatorClass::Arithmetic => Self::ComputationalOperandError { operator },
            OperatorClass::Comparison => Self::ComparisonOperandError { operator },
            OperatorClass::Logical => Self::LogicalOperandError { operator },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumericLiteral { literal } => {
                write!(f, "Error: '{literal}' is not a valid numeric literal.")
            },
            Self::UnknownIdentifier { name } => write!(f, "Error: Unknown identifier '{name}'."),
            Self::MissingConverter { name } => write!(f,
                                                      "Error: Identifier '{name}' needs a numeric conversion function, but none was supplied."),
            Self::ComputationalOperandError { operator } => write!(f,
                                                                   "Error: Arithmetic operator '{operator}' expects numeric operands."),
            Self::ComparisonOperandError { operator } => write!(f,
                                                                "Error: Comparison operator '{operator}' expects numeric operands."),
            Self::LogicalOperandError { operator } => write!(f,
                                                             "Error: Logical operator '{operator}' expects boolean operands."),
            Self::StackUnderflow { operator } => {
                write!(f, "Error: Operator '{operator}' is missing an operand.")
            },
            Self::EmptyResult => write!(f, "Error: Expression produced no value."),
            Self::MalformedResult { remaining } => write!(f,
                                                          "Error: Expression left {remaining} values instead of one."),
            Self::UnexpectedToken { token } => {
                write!(f, "Error: Token '{token}' cannot appear in RPN.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
