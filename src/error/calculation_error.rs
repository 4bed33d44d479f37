#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that make a calculation illegal.
pub enum CalculationError {
    /// A split left the operator without a left or right operand, as in `8*+9`.
    MissingOperand {
        /// The operator that was missing an operand.
        operator: char,
    },
    /// The right operand of a division evaluated to exactly zero.
    DivisionByZero,
}

impl std::fmt::Display for CalculationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { .. } => write!(f, "Error: Missing operand."),
            Self::DivisionByZero => write!(f, "Error: Dividing by zero is not allowed."),
        }
    }
}

impl std::error::Error for CalculationError {}
