#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all reasons an input line can be rejected by validation.
pub enum ValidationError {
    /// Nothing is left of the line once whitespace has been removed.
    EmptyInput,
    /// The line contains a character outside the supported alphabet.
    InvalidCharacter {
        /// The first offending character, scanning left to right.
        character: char,
        /// Character index of the offending character in the normalized
        /// expression.
        position:  usize,
    },
}

impl ValidationError {
    /// Returns the offending character, if the error is about one.
    #[must_use]
    pub const fn character(&self) -> Option<char> {
        match self {
            Self::EmptyInput => None,
            Self::InvalidCharacter { character, .. } => Some(*character),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: You did not enter an input."),
            Self::InvalidCharacter { character, .. } => {
                write!(f, "Error: {character} is not valid input.")
            },
        }
    }
}

impl std::error::Error for ValidationError {}
