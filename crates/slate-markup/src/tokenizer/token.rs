use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// A token produced by the tokenizer.
///
/// Tag structure (`<`, `>`, `/`, `=`, quotes) is emitted as individual marks
/// so the parser can recover exactly how a value was written. Slots never
/// carry a value, only their index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Token {
    /// `<` followed by an identifier character or `/`.
    OpenTagMark,
    /// `>` while inside a tag.
    CloseTagMark,
    /// `/` inside a tag, outside quotes.
    Slash,
    /// A tag or prop name: ASCII letters, digits, `.`, `:`, `_`, `-`.
    Identifier(String),
    /// `=` inside a tag.
    Equals,
    /// The `"` or `'` opening or closing a prop value.
    QuoteMark(char),
    /// Non-empty static text between quote marks.
    AttributeValue(String),
    /// Text outside any tag, verbatim.
    Text(String),
    /// A slot outside quotes: a prop value, a spread, or child content.
    ExpressionSlot(usize),
    /// A slot inside an open quote, part of a prop value.
    AttributeExpressionSlot(usize),
}

/// The payload-free kind of a [`Token`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TokenKind {
    /// See [`Token::OpenTagMark`].
    OpenTagMark,
    /// See [`Token::CloseTagMark`].
    CloseTagMark,
    /// See [`Token::Slash`].
    Slash,
    /// See [`Token::Identifier`].
    Identifier,
    /// See [`Token::Equals`].
    Equals,
    /// See [`Token::QuoteMark`].
    QuoteMark,
    /// See [`Token::AttributeValue`].
    AttributeValue,
    /// See [`Token::Text`].
    Text,
    /// See [`Token::ExpressionSlot`].
    ExpressionSlot,
    /// See [`Token::AttributeExpressionSlot`].
    AttributeExpressionSlot,
}

impl Token {
    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::OpenTagMark => TokenKind::OpenTagMark,
            Self::CloseTagMark => TokenKind::CloseTagMark,
            Self::Slash => TokenKind::Slash,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Equals => TokenKind::Equals,
            Self::QuoteMark(_) => TokenKind::QuoteMark,
            Self::AttributeValue(_) => TokenKind::AttributeValue,
            Self::Text(_) => TokenKind::Text,
            Self::ExpressionSlot(_) => TokenKind::ExpressionSlot,
            Self::AttributeExpressionSlot(_) => TokenKind::AttributeExpressionSlot,
        }
    }

    /// Returns true if this token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// The slot index, for either slot token.
    #[must_use]
    pub const fn slot(&self) -> Option<usize> {
        match self {
            Self::ExpressionSlot(index) | Self::AttributeExpressionSlot(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenTagMark => write!(f, "OpenTagMark"),
            Self::CloseTagMark => write!(f, "CloseTagMark"),
            Self::Slash => write!(f, "Slash"),
            Self::Identifier(name) => write!(f, "Identifier({name})"),
            Self::Equals => write!(f, "Equals"),
            Self::QuoteMark(quote) => write!(f, "QuoteMark({quote})"),
            Self::AttributeValue(value) => write!(f, "AttributeValue({value:?})"),
            // Show whitespace explicitly, it is significant in text
            Self::Text(text) => write!(f, "Text({text:?})"),
            Self::ExpressionSlot(index) => write!(f, "ExpressionSlot({index})"),
            Self::AttributeExpressionSlot(index) => write!(f, "AttributeExpressionSlot({index})"),
        }
    }
}
