/// Validation errors.
///
/// Defines the reasons a raw input line is rejected before evaluation: the
/// line is empty once whitespace is stripped, or it contains a character
/// outside the supported alphabet.
pub mod validation_error;
/// Calculation errors.
///
/// Contains the errors raised while evaluating a validated expression. Both
/// kinds mark the whole expression as an illegal calculation: a split that
/// left an operator without an operand, and a division whose right operand
/// evaluated to exactly zero.
pub mod calculation_error;

pub use calculation_error::CalculationError;
pub use validation_error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced while turning a raw line into a number.
pub enum CalcError {
    /// The line was rejected before evaluation.
    Validation(ValidationError),
    /// The line was accepted but could not be calculated.
    Calculation(CalculationError),
}

impl From<ValidationError> for CalcError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CalculationError> for CalcError {
    fn from(value: CalculationError) -> Self {
        Self::Calculation(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::Calculation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Calculation(e) => Some(e),
        }
    }
}
