use tracing::debug;

use crate::{
    Outcome,
    ast::{Operator, SplitTree},
    calculate_with,
    error::{CalcError, CalculationError, ValidationError},
    interpreter::{
        evaluator::decompose,
        expression::{Expression, SupportedCharacters},
        lexer::operator_positions,
    },
    util::num::{DEFAULT_PRECISION, format_general},
};

/// Split trees are only built for expressions with at most this many
/// operators; the tree nests once per operator.
pub const EXPLAIN_LIMIT: usize = 1024;

/// Prompt shown before each input line.
pub const PROMPT: &str = "Enter an expression: ";

/// Per-line driver of the interactive calculator.
///
/// A session keeps no state between lines; it only holds the alphabet used
/// for validation and the output settings.
#[derive(Debug, Clone)]
pub struct Session {
    allowed:   SupportedCharacters,
    precision: u8,
    explain:   bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the default alphabet, six significant digits,
    /// and no split tree output.
    #[must_use]
    pub fn new() -> Self {
        Self { allowed:   SupportedCharacters::default(),
               precision: DEFAULT_PRECISION,
               explain:   false, }
    }

    /// Sets the number of significant digits used for results.
    #[must_use]
    pub const fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Enables printing the split tree after each result.
    #[must_use]
    pub const fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Replaces the alphabet used for validation.
    #[must_use]
    pub fn with_allowed(mut self, allowed: SupportedCharacters) -> Self {
        self.allowed = allowed;
        self
    }

    /// The welcome message listing the supported operators and quit keys.
    ///
    /// # Example
    /// ```
    /// use splitcalc::session::Session;
    ///
    /// assert!(Session::banner().contains("operations: + - * /"));
    /// ```
    #[must_use]
    pub fn banner() -> String {
        let operators: String = Operator::SCAN_ORDER.iter().map(|op| format!(" {op}")).collect();

        format!("\nThis calculator supports the following operations:{operators}\nTo quit at any \
                 time, enter q or Q.")
    }

    /// Handles one raw input line.
    ///
    /// # Example
    /// ```
    /// use splitcalc::session::Session;
    ///
    /// let session = Session::new();
    /// assert_eq!(session.respond("10 / 4").to_string(), "10 / 4=2.5");
    /// assert!(session.respond("quit").is_quit());
    /// ```
    #[must_use]
    pub fn respond(&self, raw: &str) -> Response {
        let response = match calculate_with(raw, &self.allowed) {
            Ok(Outcome::Quit) => Response::Quit,
            Ok(Outcome::Value(value)) => {
                let expression = Expression::new(raw);
                let explainable =
                    self.explain && operator_positions(expression.as_str()).len() <= EXPLAIN_LIMIT;
                let tree = explainable.then(|| decompose(expression.as_str()));
                Response::Value { input: raw.to_string(),
                                  result: format_general(value, self.precision),
                                  value,
                                  tree }
            },
            Err(CalcError::Validation(e)) => Response::Rejected(e),
            Err(CalcError::Calculation(e)) => Response::Illegal(e),
        };

        debug!(?response, "responded");
        response
    }
}

/// What the calculator shows for one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The user asked to quit; nothing is shown.
    Quit,
    /// The line was calculated.
    Value {
        /// The line exactly as entered.
        input:  String,
        /// The formatted result.
        result: String,
        /// The unformatted result.
        value:  f64,
        /// The split tree, when explaining is enabled and the expression is
        /// small enough.
        tree:   Option<SplitTree>,
    },
    /// The line was rejected by validation; the user should try again.
    Rejected(ValidationError),
    /// The calculation was illegal; the user should try again.
    Illegal(CalculationError),
}

impl Response {
    /// Returns `true` if the line asked to quit.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` unless the line was rejected or illegal.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Quit | Self::Value { .. })
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quit => Ok(()),
            Self::Value { input, result, tree, .. } => {
                write!(f, "{input}={result}")?;
                if let Some(tree) = tree {
                    write!(f, "\nsplit: {tree}")?;
                }
                Ok(())
            },
            Self::Rejected(e) => write!(f, "\n{e}\nInvalid input. Please try again."),
            Self::Illegal(e) => write!(f, "\n{e}\nIllegal calculation. Please try again."),
        }
    }
}
