use crate::util::num::{bool_to_f64, f64_to_bool};

/// The binary operators understood by the parser and executor.
///
/// The discriminants index [`OPERATOR_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `==`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `||` or `|`
    Or,
    /// `&&` or `&`
    And,
}

/// Groups operators by the operand type they accept and the result they
/// produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// Numbers in, number out.
    Arithmetic,
    /// Numbers in, boolean out.
    Comparison,
    /// Booleans in, boolean out.
    Logical,
}

impl std::fmt::Display for OperatorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arithmetic => write!(f, "arithmetic"),
            Self::Comparison => write!(f, "comparison"),
            Self::Logical => write!(f, "logical"),
        }
    }
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// One row of the operator table.
#[derive(Debug, Clone, Copy)]
pub struct OperatorSpec {
    /// Which operator this row describes.
    pub kind:          OpKind,
    /// Canonical source symbol.
    pub symbol:        &'static str,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping direction for ties.
    pub associativity: Associativity,
    /// Operand/result class.
    pub class:         OperatorClass,
    /// The operation over numeric representations. Comparison and logical
    /// operators return `1.0` or `0.0`.
    pub apply:         fn(f64, f64) -> f64,
}

const fn row(kind: OpKind,
             symbol: &'static str,
             precedence: u8,
             associativity: Associativity,
             class: OperatorClass,
             apply: fn(f64, f64) -> f64)
             -> OperatorSpec {
    OperatorSpec { kind,
                   symbol,
                   precedence,
                   associativity,
                   class,
                   apply }
}

/// Process-wide operator table, in `OpKind` discriminant order.
#[allow(clippy::float_cmp)]
pub static OPERATOR_TABLE: [OperatorSpec; 13] = {
    use Associativity::{Left, Right};
    use OperatorClass::{Arithmetic, Comparison, Logical};

    [row(OpKind::Add, "+", 2, Left, Arithmetic, |a, b| a + b),
     row(OpKind::Sub, "-", 2, Left, Arithmetic, |a, b| a - b),
     row(OpKind::Mul, "*", 3, Left, Arithmetic, |a, b| a * b),
     row(OpKind::Div, "/", 3, Left, Arithmetic, |a, b| a / b),
     row(OpKind::Pow, "^", 4, Right, Arithmetic, f64::powf),
     row(OpKind::Equal, "==", 1, Left, Comparison, |a, b| bool_to_f64(a == b)),
     row(OpKind::Less, "<", 1, Left, Comparison, |a, b| bool_to_f64(a < b)),
     row(OpKind::Greater, ">", 1, Left, Comparison, |a, b| bool_to_f64(a > b)),
     row(OpKind::NotEqual, "!=", 1, Left, Comparison, |a, b| bool_to_f64(a != b)),
     row(OpKind::LessEqual, "<=", 1, Left, Comparison, |a, b| bool_to_f64(a <= b)),
     row(OpKind::GreaterEqual, ">=", 1, Left, Comparison, |a, b| bool_to_f64(a >= b)),
     row(OpKind::Or, "||", 0, Left, Logical, |a, b| {
         bool_to_f64(f64_to_bool(a) || f64_to_bool(b))
     }),
     row(OpKind::And, "&&", 0, Left, Logical, |a, b| {
         bool_to_f64(f64_to_bool(a) && f64_to_bool(b))
     })]
};

/// Looks up the table row for `kind`.
///
/// Returns `None` only if the table and `OpKind` have drifted apart; the
/// parser reports that as `UnrecognizedOperator`.
///
/// # Example
/// ```
/// use rpnexpr::interpreter::operator::{OpKind, lookup};
///
/// let spec = lookup(OpKind::Mul).unwrap();
/// assert_eq!(spec.symbol, "*");
/// assert_eq!(spec.precedence, 3);
/// ```
#[must_use]
pub fn lookup(kind: OpKind) -> Option<&'static OperatorSpec> {
    OPERATOR_TABLE.get(kind as usize).filter(|spec| spec.kind == kind)
}

impl OpKind {
    /// Every operator, in table order.
    pub const ALL: [Self; 13] = [Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Pow,
                                 Self::Equal,
                                 Self::Less,
                                 Self::Greater,
                                 Self::NotEqual,
                                 Self::LessEqual,
                                 Self::GreaterEqual,
                                 Self::Or,
                                 Self::And];

    /// Returns the table row for this operator.
    #[must_use]
    pub fn spec(self) -> &'static OperatorSpec {
        &OPERATOR_TABLE[self as usize]
    }

    /// Canonical source symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.spec().symbol
    }

    /// Precedence rank: logical 0, comparison 1, additive 2, multiplicative 3,
    /// power 4.
    #[must_use]
    pub fn precedence(self) -> u8 {
        self.spec().precedence
    }

    /// Grouping direction for ties.
    #[must_use]
    pub fn associativity(self) -> Associativity {
        self.spec().associativity
    }

    /// Operand/result class.
    #[must_use]
    pub fn class(self) -> OperatorClass {
        self.spec().class
    }

    /// Applies the operator to two numeric representations.
    ///
    /// # Example
    /// ```
    /// use rpnexpr::interpreter::operator::OpKind;
    ///
    /// assert_eq!(OpKind::Pow.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(OpKind::Less.apply(1.0, 2.0), 1.0);
    /// assert_eq!(OpKind::And.apply(1.0, 0.0), 0.0);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        (self.spec().apply)(left, right)
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
