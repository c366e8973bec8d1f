//! Element props (attributes).

use core::fmt;

use serde::{Deserialize, Serialize};

/// One fragment of a quoted prop value that mixes text and slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ValuePart {
    /// Literal text. Never empty inside a [`Prop::Mixed`].
    Static(String),
    /// A slot interpolated inside the quotes.
    Slot(usize),
}

impl fmt::Display for ValuePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.write_str(text),
            Self::Slot(slot) => write!(f, "${{{slot}}}"),
        }
    }
}

/// A prop on an element, resolved to exactly one value shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Prop {
    /// `checked` - present with no value, logically `true`.
    Boolean {
        /// Prop name.
        name: String,
    },
    /// `id="app"` - a fixed string value.
    Static {
        /// Prop name.
        name: String,
        /// The value between the quotes.
        value: String,
        /// The quote character that bounded the value.
        quote: char,
    },
    /// `id=${0}` or `id="${0}"` - the value is exactly one slot.
    Expression {
        /// Prop name.
        name: String,
        /// Zero-based slot index.
        slot: usize,
    },
    /// `<div ${0}>` - a slot standing in for a whole name/value mapping.
    Spread {
        /// Zero-based slot index.
        slot: usize,
    },
    /// `class="btn ${0}"` - interleaved text and slots.
    Mixed {
        /// Prop name.
        name: String,
        /// Fragments in source order; adjacent text is always coalesced.
        parts: Vec<ValuePart>,
        /// The quote character that bounded the value.
        quote: char,
    },
}

impl Prop {
    /// The prop name, or `None` for a spread.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Boolean { name }
            | Self::Static { name, .. }
            | Self::Expression { name, .. }
            | Self::Mixed { name, .. } => Some(name),
            Self::Spread { .. } => None,
        }
    }

    /// Slot indices referenced by this prop, in source order.
    #[must_use]
    pub fn slots(&self) -> Vec<usize> {
        match self {
            Self::Boolean { .. } | Self::Static { .. } => Vec::new(),
            Self::Expression { slot, .. } | Self::Spread { slot } => vec![*slot],
            Self::Mixed { parts, .. } => parts
                .iter()
                .filter_map(|part| match part {
                    ValuePart::Slot(slot) => Some(*slot),
                    ValuePart::Static(_) => None,
                })
                .collect(),
        }
    }
}

/// Renders the prop back as markup, with `${n}` standing for slot `n`.
impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean { name } => f.write_str(name),
            Self::Static { name, value, quote } => write!(f, "{name}={quote}{value}{quote}"),
            Self::Expression { name, slot } => write!(f, "{name}=${{{slot}}}"),
            Self::Spread { slot } => write!(f, "${{{slot}}}"),
            Self::Mixed { name, parts, quote } => {
                write!(f, "{name}={quote}")?;
                for part in parts {
                    write!(f, "{part}")?;
                }
                write!(f, "{quote}")
            }
        }
    }
}
