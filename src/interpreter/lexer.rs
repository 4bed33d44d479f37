use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token of a normalized expression.
///
/// Expressions only contain number runs and operators. Number runs are kept
/// as raw text because leaves are parsed leniently, so a run like `3..4` is a
/// single token. Any other character is reported by the lexer as an error
/// and skipped by the scanner.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A run of digits and dots, such as `34`, `.5` or `3..4`.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Whitespace never survives normalization, but raw text may still hold
    /// some when the lexer is used directly.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// The operator this token stands for, if it is one.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Number | Self::Ignored => None,
        }
    }
}

/// Lists every operator in `text` together with its byte offset, left to
/// right.
///
/// Characters the lexer does not recognise are skipped; they end up inside a
/// leaf and are dealt with by the lenient number parse.
///
/// # Example
/// ```
/// use splitcalc::{ast::Operator, interpreter::lexer::operator_positions};
///
/// assert_eq!(operator_positions("34+5*12"), vec![(Operator::Add, 2), (Operator::Mul, 4)]);
/// assert!(operator_positions("3.5").is_empty());
/// ```
#[must_use]
pub fn operator_positions(text: &str) -> Vec<(Operator, usize)> {
    Token::lexer(text).spanned()
                      .filter_map(|(token, span)| {
                          token.ok()
                               .and_then(Token::operator)
                               .map(|op| (op, span.start))
                      })
                      .collect()
}
