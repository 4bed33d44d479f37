use std::collections::BTreeSet;

use tracing::debug;

use crate::error::ValidationError;

/// Digits, the decimal point, the space and the four operators.
pub const DEFAULT_ALPHABET: &str = "0123456789. +-*/";

/// The set of characters an expression may contain.
///
/// `Default` yields the calculator's alphabet. Validation takes the set as a
/// parameter so callers can narrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedCharacters {
    chars: BTreeSet<char>,
}

impl SupportedCharacters {
    /// Returns `true` if `c` may appear in an expression.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Iterates over the supported characters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SupportedCharacters {
    fn default() -> Self {
        DEFAULT_ALPHABET.chars().collect()
    }
}

impl FromIterator<char> for SupportedCharacters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self { chars: iter.into_iter().collect() }
    }
}

/// An input line with its whitespace removed.
///
/// Once constructed the text never changes, and it never contains
/// whitespace. Sub-expressions produced while splitting are plain `&str`
/// slices of this text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    text: String,
}

impl Expression {
    /// Normalizes a raw line by dropping whitespace, keeping every other
    /// character in order.
    ///
    /// Only the ASCII whitespace of the C locale is dropped (space, tab, line
    /// feed, vertical tab, form feed, carriage return). Other Unicode spaces
    /// such as U+00A0 stay in and are rejected by validation.
    ///
    /// # Example
    /// ```
    /// use splitcalc::interpreter::expression::Expression;
    ///
    /// assert_eq!(Expression::new(" 34 + 5\t* 12 ").as_str(), "34+5*12");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self { text: raw.chars().filter(|&c| !is_c_space(c)).collect() }
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if nothing is left after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the text contains `q` or `Q` anywhere.
    ///
    /// Any line holding either letter asks to quit, even when the letter is
    /// part of other text.
    ///
    /// # Example
    /// ```
    /// use splitcalc::interpreter::expression::Expression;
    ///
    /// assert!(Expression::new("Q").is_quit_request());
    /// assert!(Expression::new("1+quit").is_quit_request());
    /// assert!(!Expression::new("1+1").is_quit_request());
    /// ```
    #[must_use]
    pub fn is_quit_request(&self) -> bool {
        self.text.contains(['q', 'Q'])
    }

    /// Checks that the expression is non-empty and made only of `allowed`
    /// characters.
    ///
    /// # Errors
    /// - `ValidationError::EmptyInput` if the expression is empty.
    /// - `ValidationError::InvalidCharacter` for the first character, scanning
    ///   left to right, that is not in `allowed`.
    ///
    /// # Example
    /// ```
    /// use splitcalc::{
    ///     error::ValidationError,
    ///     interpreter::expression::{Expression, SupportedCharacters},
    /// };
    ///
    /// let allowed = SupportedCharacters::default();
    /// assert!(Expression::new("2 + 2").is_valid(&allowed).is_ok());
    /// assert_eq!(Expression::new("   ").is_valid(&allowed), Err(ValidationError::EmptyInput));
    /// assert_eq!(Expression::new("2+a").is_valid(&allowed).unwrap_err().character(), Some('a'));
    /// ```
    pub fn is_valid(&self, allowed: &SupportedCharacters) -> Result<(), ValidationError> {
        if self.is_empty() {
            debug!("rejected empty input");
            return Err(ValidationError::EmptyInput);
        }

        if let Some((position, character)) =
            self.text.chars().enumerate().find(|(_, c)| !allowed.contains(*c))
        {
            debug!(%character, position, "rejected unsupported character");
            return Err(ValidationError::InvalidCharacter { character, position });
        }

        Ok(())
    }
}

const fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
