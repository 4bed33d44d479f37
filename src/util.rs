/// Number parsing and formatting helpers.
///
/// This module provides the lenient prefix parse used for leaf expressions
/// and the `%g` style formatting used when printing results, so that
/// calculated values read the same way a default C++ output stream would show
/// them.
pub mod num;
