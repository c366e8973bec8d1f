//! Tokenizer and parser for HTML-like markup with interpolation slots.
//!
//! # Scope
//!
//! Input is a list of literal segments with an opaque *slot* between each
//! adjacent pair, the shape a tagged template hands its tag function. Slots
//! are never inspected; the tree refers to them by index.
//!
//! This crate implements:
//! - **Tokenizer** ([`TemplateTokenizer`]): a character-level state machine
//!   tracking tag depth, quoting, and which slots fall inside quotes
//! - **Parser** ([`TemplateParser`]): LL(1) over the tokens with an explicit
//!   stack of open elements, resolving each prop to a boolean, static, slot,
//!   spread, or mixed value
//! - **Options** ([`ParseOptions`]): void and raw-text element tables,
//!   strict closing tags, whitespace policy
//!
//! # Not Implemented
//!
//! - HTML5 tree construction (implicit tag closing, error recovery)
//! - Character reference decoding
//! - Evaluating slot values
//!
//! ```text
//! let root = slate_markup::parse(&["<div class=\"btn ", "\">", "</div>"], 2)?;
//! ```

/// Parse configuration.
pub mod options;
/// Parser from tokens to a tree.
pub mod parser;
/// Single-string templates with `${...}` placeholders.
pub mod template;
/// Tokenizer for converting segments and slots into tokens.
pub mod tokenizer;

pub use options::{ParseOptions, WhitespaceMode};
pub use parser::{SyntaxError, TemplateParser};
pub use slate_ast::{
    Element, Expression, Node, Prop, Root, Text, ValuePart, print_tree, write_tree,
};
pub use template::Template;
pub use tokenizer::{TemplateTokenizer, Token, TokenKind};

/// Tokenize `segments` with one slot between each adjacent pair.
///
/// `slot_count` should be `segments.len() - 1`.
#[must_use]
pub fn tokenize<S: AsRef<str>>(segments: &[S], slot_count: usize) -> Vec<Token> {
    tokenize_with_options(segments, slot_count, &ParseOptions::default())
}

/// Tokenize using the raw-text element table from `options`.
#[must_use]
pub fn tokenize_with_options<S: AsRef<str>>(
    segments: &[S],
    slot_count: usize,
    options: &ParseOptions,
) -> Vec<Token> {
    let mut tokenizer = TemplateTokenizer::new(segments, slot_count).with_options(options);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Parse `segments` into a tree with default options.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the markup is malformed.
pub fn parse<S: AsRef<str>>(segments: &[S], slot_count: usize) -> Result<Root, SyntaxError> {
    parse_with_options(segments, slot_count, &ParseOptions::default())
}

/// Parse `segments` into a tree.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the markup is malformed, or, in strict mode,
/// if a closing tag names a different element.
pub fn parse_with_options<S: AsRef<str>>(
    segments: &[S],
    slot_count: usize,
    options: &ParseOptions,
) -> Result<Root, SyntaxError> {
    let tokens = tokenize_with_options(segments, slot_count, options);
    TemplateParser::new(tokens).with_options(options).run()
}
