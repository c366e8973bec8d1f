//! Template tokenizer module.
//!
//! Turns literal segments plus slot positions into a flat token stream. The
//! tokenizer tracks only quoting, tag depth and (optionally) raw-text bodies;
//! element nesting is the parser's business.

/// Tokenizer state machine implementation.
pub mod machine;
/// Helper methods for input handling and token emission.
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use machine::{TemplateTokenizer, TokenizerState, is_identifier_char};
pub use token::{Token, TokenKind};
