use thiserror::Error;

use crate::tokenizer::TokenKind;

/// The token stream does not match the grammar at the current position.
///
/// This is the only failure the parser reports. It is always fatal to the
/// current parse; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A required token was missing and another token was found instead.
    #[error("expected {expected}, found {found} at token {position}")]
    UnexpectedToken {
        /// The kind the grammar required here.
        expected: TokenKind,
        /// The kind actually present.
        found: TokenKind,
        /// Index of the offending token in the stream.
        position: usize,
    },
    /// The token stream ended where a token was required.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        /// The kind the grammar required here.
        expected: TokenKind,
    },
    /// A closing tag named a different element (strict mode only).
    #[error("closing tag </{found}> does not match <{expected}> at token {position}")]
    MismatchedClosingTag {
        /// Name of the element being closed.
        expected: String,
        /// Name written in the closing tag.
        found: String,
        /// Index of the closing tag's identifier in the stream.
        position: usize,
    },
}

impl SyntaxError {
    /// The token kind the parser was waiting for, if the error is about a
    /// missing token.
    #[must_use]
    pub const fn expected_kind(&self) -> Option<TokenKind> {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEnd { expected } => {
                Some(*expected)
            }
            Self::MismatchedClosingTag { .. } => None,
        }
    }
}
