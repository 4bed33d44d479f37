/// The evaluator module computes the value of an expression.
///
/// The evaluator splits expression text at the operator chosen by the
/// scanner, evaluates both sides recursively, and combines them. Leaves are
/// parsed leniently. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates expressions by recursive splitting, left side first.
/// - Reports missing operands and division by zero as the first error raised.
/// - Exposes the split tree for inspection.
pub mod evaluator;
/// The expression module normalizes and validates input lines.
///
/// An input line becomes an `Expression` once its whitespace is removed.
/// The expression answers whether the user asked to quit and whether it only
/// holds supported characters.
///
/// # Responsibilities
/// - Strips whitespace while keeping the order of other characters.
/// - Detects quit requests (`q` or `Q` anywhere).
/// - Rejects empty input and reports the first unsupported character.
pub mod expression;
/// The lexer module tokenizes expression text.
///
/// The lexer classifies the text into number runs and operator tokens with
/// their byte spans. It feeds the precedence scanner.
pub mod lexer;
/// The scanner module chooses where an expression is split.
///
/// Operators are searched in the fixed order `+ - * /`; the first kind
/// present wins and its leftmost occurrence is the split point.
pub mod scanner;
