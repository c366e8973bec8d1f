//! Parser module: token stream to syntax tree.

/// Token-stream parser with an explicit stack of open elements.
pub mod builder;
/// The parse error type.
pub mod error;
mod value;
mod whitespace;

pub use builder::TemplateParser;
pub use error::SyntaxError;
