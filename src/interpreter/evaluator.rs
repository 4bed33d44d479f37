use tracing::{debug, trace};

use crate::{
    ast::SplitTree,
    error::CalculationError,
    interpreter::{
        expression::Expression,
        scanner::{Chain, next_chain},
    },
    util::num::lenient_f64,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `CalculationError` that made the calculation illegal. The first error
/// raised anywhere in the recursion is the one returned.
pub type EvalResult<T> = Result<T, CalculationError>;

/// Evaluates a normalized expression.
///
/// This is the main entry point for evaluation. The expression is assumed to
/// have passed the quit check and validation already.
///
/// # Errors
/// Returns `CalculationError::MissingOperand` when a split leaves an empty
/// side, and `CalculationError::DivisionByZero` when a divisor evaluates to
/// zero.
///
/// # Example
/// ```
/// use splitcalc::interpreter::{evaluator::evaluate, expression::Expression};
///
/// assert_eq!(evaluate(&Expression::new("2+3*4-5/5")), Ok(13.0));
/// ```
pub fn evaluate(expression: &Expression) -> EvalResult<f64> {
    let result = evaluate_str(expression.as_str());
    debug!(expression = expression.as_str(), ?result, "evaluated");
    result
}

/// Evaluates expression text by recursive splitting.
///
/// Text without an operator is a leaf and is parsed leniently: the longest
/// numeric prefix counts, anything else reads as `0`. Otherwise the text is
/// split at the operator picked by the scanner and both sides are evaluated
/// independently, left first.
///
/// Consecutive splits on the same operator are walked as one chain, so the
/// recursion only nests once per operator kind however long the input is.
/// Each split still checks for an empty side before evaluating its left
/// operand, and operands are combined right to left.
///
/// # Errors
/// See [`evaluate`].
///
/// # Example
/// ```
/// use splitcalc::{error::CalculationError, interpreter::evaluator::evaluate_str};
///
/// assert_eq!(evaluate_str("34+5*12"), Ok(94.0));
/// assert_eq!(evaluate_str("10+3-2-5"), Ok(16.0));
/// assert_eq!(evaluate_str("8*+9"), Err(CalculationError::MissingOperand { operator: '*' }));
/// assert_eq!(evaluate_str("5/0"), Err(CalculationError::DivisionByZero));
/// ```
pub fn evaluate_str(text: &str) -> EvalResult<f64> {
    let Some(Chain { op, operands }) = next_chain(text) else {
        let value = lenient_f64(text);
        trace!(text, value, "leaf");
        return Ok(value);
    };

    trace!(%op, operands = operands.len(), "chain");

    let missing = CalculationError::MissingOperand { operator: op.symbol() };
    let (last, leading) = operands.split_last().ok_or(missing)?;

    let mut values = Vec::with_capacity(operands.len());
    for (i, operand) in leading.iter().enumerate() {
        let rest_is_empty = i + 1 == leading.len() && last.is_empty();
        if operand.is_empty() || rest_is_empty {
            return Err(missing);
        }
        values.push(evaluate_str(operand)?);
    }

    let mut result = evaluate_str(last)?;
    for left in values.into_iter().rev() {
        result = op.apply(left, result)?;
    }

    Ok(result)
}

/// Builds the split tree the evaluator would walk for `text`.
///
/// Empty sides are kept as empty leaves instead of being reported, so the
/// tree of a malformed expression can still be shown.
///
/// # Example
/// ```
/// use splitcalc::interpreter::evaluator::decompose;
///
/// assert_eq!(decompose("2+3*4-5/5").to_string(), "(2 + ((3 * 4) - (5 / 5)))");
/// assert_eq!(decompose("8*+9").to_string(), "((8 * _) + 9)");
/// assert_eq!(decompose("10-3-2").to_string(), "(10 - (3 - 2))");
/// ```
#[must_use]
pub fn decompose(text: &str) -> SplitTree {
    let Some(Chain { op, operands }) = next_chain(text) else {
        return SplitTree::Leaf(text.to_string());
    };

    let mut operands = operands.into_iter().rev();
    let mut tree = decompose(operands.next().unwrap_or_default());
    for left in operands {
        tree = SplitTree::Split { left: Box::new(decompose(left)),
                                  op,
                                  right: Box::new(tree) };
    }

    tree
}
