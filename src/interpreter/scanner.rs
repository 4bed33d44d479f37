use crate::{ast::Operator, interpreter::lexer::operator_positions};

/// An expression cut in three at the operator chosen by the scanner.
///
/// Both sides borrow from the scanned text and may be empty; an empty side is
/// how a missing operand shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Text before the operator.
    pub left:  &'a str,
    /// The operator split on.
    pub op:    Operator,
    /// Text after the operator.
    pub right: &'a str,
}

/// Finds the byte position of the operator to split on next.
///
/// Operators are tried in `Operator::SCAN_ORDER`; the first operator kind that
/// occurs anywhere in `text` wins, and its leftmost occurrence is returned.
/// Adjacent operators are not treated specially here.
///
/// # Returns
/// - `Some(position)` of the chosen operator.
/// - `None` if `text` contains no operator.
///
/// # Example
/// ```
/// use splitcalc::interpreter::scanner::next_operator_position;
///
/// assert_eq!(next_operator_position("2*3+4+5"), Some(3));
/// assert_eq!(next_operator_position("8/2-1"), Some(3));
/// assert_eq!(next_operator_position("42"), None);
/// ```
#[must_use]
pub fn next_operator_position(text: &str) -> Option<usize> {
    next_operator(text).map(|(_, position)| position)
}

/// Splits `text` at the position chosen by `next_operator_position`.
///
/// # Example
/// ```
/// use splitcalc::{ast::Operator, interpreter::scanner::next_split};
///
/// let split = next_split("8*+9").unwrap();
/// assert_eq!((split.left, split.op, split.right), ("8*", Operator::Add, "9"));
/// assert!(next_split("7").is_none());
/// ```
#[must_use]
pub fn next_split(text: &str) -> Option<Split<'_>> {
    let (op, position) = next_operator(text)?;

    Some(Split { left: &text[..position],
                 op,
                 right: &text[position + 1..] })
}

fn next_operator(text: &str) -> Option<(Operator, usize)> {
    let found = operator_positions(text);

    Operator::SCAN_ORDER.iter()
                        .find_map(|&wanted| found.iter().find(|(op, _)| *op == wanted))
                        .copied()
}

/// Every operand of the operator the scanner would split on, in order.
///
/// Splitting at the leftmost operator of the chosen kind leaves a right side
/// that holds only that kind or tighter binding ones, so repeated splitting
/// peels off one operand at a time. A chain lists those operands at once:
/// `a-b-c` is `a - (b - c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<'a> {
    /// The operator joining the operands.
    pub op:       Operator,
    /// At least two operands; any of them may be empty.
    pub operands: Vec<&'a str>,
}

/// Cuts `text` at every occurrence of the operator `next_split` would choose.
///
/// The text is lexed once.
///
/// # Example
/// ```
/// use splitcalc::{ast::Operator, interpreter::scanner::next_chain};
///
/// let chain = next_chain("10-3*2-2").unwrap();
/// assert_eq!(chain.op, Operator::Sub);
/// assert_eq!(chain.operands, vec!["10", "3*2", "2"]);
/// assert_eq!(next_chain("2//2").unwrap().operands, vec!["2", "", "2"]);
/// assert!(next_chain("7").is_none());
/// ```
#[must_use]
pub fn next_chain(text: &str) -> Option<Chain<'_>> {
    let found = operator_positions(text);
    let op = Operator::SCAN_ORDER.into_iter()
                                 .find(|wanted| found.iter().any(|(op, _)| op == wanted))?;

    let mut operands = Vec::new();
    let mut start = 0;
    for &(_, position) in found.iter().filter(|(found_op, _)| *found_op == op) {
        operands.push(&text[start..position]);
        start = position + 1;
    }
    operands.push(&text[start..]);

    Some(Chain { op, operands })
}
