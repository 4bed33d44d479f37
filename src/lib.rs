//! # splitcalc
//!
//! splitcalc is a four-operator calculator written in Rust. It reads one
//! line at a time, strips whitespace, validates the characters, and
//! evaluates the expression by recursively splitting it at the loosest
//! binding operator (`+`, then `-`, then `*`, then `/`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::evaluate,
        expression::{Expression, SupportedCharacters},
    },
};

/// Defines the operators and the split tree.
///
/// This module declares the `Operator` enum, whose declaration order is the
/// scan order of the precedence scanner, and the `SplitTree` that records how
/// an expression decomposes.
///
/// # Responsibilities
/// - Maps operator characters to operators and back.
/// - Applies an operator to two operands, refusing division by zero.
/// - Renders decompositions in fully parenthesised form.
pub mod ast;
/// Provides the error types for validation and calculation.
///
/// This module defines every way a line can fail: validation errors recovered
/// by reprompting, and calculation errors that make the whole expression an
/// illegal calculation.
///
/// # Responsibilities
/// - Defines error enums for validation and evaluation.
/// - Carries the offending character or operator for diagnostics.
/// - Supports `?` through `From` conversions into `CalcError`.
pub mod error;
/// Orchestrates normalization, validation, scanning and evaluation.
///
/// # Responsibilities
/// - Coordinates the expression, lexer, scanner and evaluator.
/// - Provides entry points for validating and evaluating input.
pub mod interpreter;
/// Turns input lines into the text shown to the user.
///
/// A `Session` holds the output settings and produces a `Response` for each
/// line, including the diagnostics of the interactive program.
pub mod session;
/// General utilities for number parsing and formatting.
///
/// # Responsibilities
/// - Parse the numeric prefix of a leaf the lenient way.
/// - Format results with a fixed number of significant digits.
pub mod util;

/// What a successfully handled line amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The line asked to quit.
    Quit,
    /// The line evaluated to a trustworthy number.
    Value(f64),
}

/// Runs one raw input line through the whole pipeline with the default
/// alphabet.
///
/// The quit check happens before validation, and validation before
/// evaluation.
///
/// # Errors
/// Returns a validation error for empty or unsupported input, and a
/// calculation error for an illegal calculation.
///
/// # Examples
/// ```
/// use splitcalc::{Outcome, calculate};
///
/// assert_eq!(calculate("34 + 5 * 12 - 311 / 8"), Ok(Outcome::Value(55.125)));
/// assert_eq!(calculate("q"), Ok(Outcome::Quit));
/// assert!(calculate("5/0").is_err());
/// ```
pub fn calculate(raw: &str) -> Result<Outcome, CalcError> {
    calculate_with(raw, &SupportedCharacters::default())
}

/// Same as [`calculate`], validating against `allowed`.
pub fn calculate_with(raw: &str, allowed: &SupportedCharacters) -> Result<Outcome, CalcError> {
    let expression = Expression::new(raw);

    if expression.is_quit_request() {
        return Ok(Outcome::Quit);
    }

    expression.is_valid(allowed)?;

    Ok(Outcome::Value(evaluate(&expression)?))
}
