use crate::{error::CalculationError, interpreter::evaluator::EvalResult};

/// Represents one of the four supported binary operators.
///
/// The declaration order is the scan order used by the precedence scanner:
/// an expression is split on `+` first, then `-`, then `*`, then `/`. The
/// operator found first therefore binds loosest, which gives the documented
/// order of operations `/ * - +`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Operators in the order the scanner looks for them.
    pub const SCAN_ORDER: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the operator written as `c`, if any.
    ///
    /// # Example
    /// ```
    /// use splitcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_char('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_char('^'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Combines two evaluated operands.
    ///
    /// Division checks its right operand explicitly: a divisor of exactly
    /// zero (positive or negative) is an illegal calculation rather than an
    /// infinity.
    ///
    /// # Errors
    /// Returns `CalculationError::DivisionByZero` when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use splitcalc::{ast::Operator, error::CalculationError};
    ///
    /// assert_eq!(Operator::Sub.apply(12.0, 1.0), Ok(11.0));
    /// assert_eq!(Operator::Div.apply(5.0, 0.0), Err(CalculationError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The decomposition of an expression as the evaluator sees it.
///
/// Evaluation never needs this tree; it splits substrings directly. The tree
/// exists so the split policy can be inspected, printed with `--explain`, and
/// tested without going through arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitTree {
    /// Text without any operator, parsed leniently as a number.
    Leaf(String),
    /// Text split at the operator chosen by the precedence scanner.
    Split {
        /// Everything before the operator.
        left:  Box<Self>,
        /// The operator split on.
        op:    Operator,
        /// Everything after the operator.
        right: Box<Self>,
    },
}

impl SplitTree {
    /// Returns `true` for a node without an operator.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of split nodes in the tree.
    #[must_use]
    pub fn split_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Split { left, right, .. } => 1 + left.split_count() + right.split_count(),
        }
    }
}

impl std::fmt::Display for SplitTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(text) if text.is_empty() => write!(f, "_"),
            Self::Leaf(text) => write!(f, "{text}"),
            Self::Split { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
