use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during scanning or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that does not start any token.
    ///
    /// Only fatal under [`ScanPolicy::FailFast`](crate::ScanPolicy); otherwise
    /// the character is skipped and the error kept as a warning.
    #[error("Error {position}: Invalid input character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// A `!` that is not part of `!=`.
    #[error("Error {position}: Expected '=' after '!'.")]
    ExpectedEquals {
        /// Position of the `!`.
        position: Position,
    },
    /// Found a token other than the one the grammar requires.
    #[error("Error {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Display name of the required symbol.
        expected: String,
        /// Display name of the token actually found.
        found:    String,
        /// Where the found token starts.
        position: Position,
    },
    /// A token that cannot start an operand.
    #[error("Error {position}: Unexpected symbol {found}.")]
    UnexpectedSymbol {
        /// Display name of the token found.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
}

impl ParseError {
    /// Gets the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::ExpectedEquals { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedSymbol { position, .. } => *position,
        }
    }
}
