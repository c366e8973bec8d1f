//! Helper functions for the template tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - Input/character handling (consume, peek, runs)
//! - Token emission (marks, text coalescing, slots)
//! - Diagnostics for skipped input

use slate_common::warning::warn_once;

use super::machine::{TemplateTokenizer, is_identifier_char};
use super::token::Token;

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl<'a> TemplateTokenizer<'a> {
    /// Returns the character at the cursor and advances past it.
    /// Returns None at the end of the segment.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    /// The character at the cursor, without consuming it.
    pub(super) fn peek(&self) -> Option<char> {
        self.peek_codepoint(0)
    }

    /// Peek at a codepoint at the given offset from the cursor without
    /// consuming it.
    pub(super) fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.cursor..].chars().nth(offset)
    }

    /// Consume the maximal run of characters matching `pred` and return it.
    pub(super) fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.cursor;
        while let Some(c) = self.peek()
            && pred(c)
        {
            self.cursor += c.len_utf8();
        }
        &input[start..self.cursor]
    }

    /// True if the cursor is on a `<` that opens a tag: one followed by an
    /// identifier character (`<div`) or a slash (`</div`).
    pub(super) fn at_tag_open(&self) -> bool {
        self.peek() == Some('<')
            && self
                .peek_codepoint(1)
                .is_some_and(|next| next == '/' || is_identifier_char(next))
    }

    /// Whitespace skipped between names inside a tag.
    pub(super) fn is_whitespace_char(c: char) -> bool {
        c.is_whitespace()
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl TemplateTokenizer<'_> {
    /// Adds a token to the output stream.
    pub(super) fn emit(&mut self, token: Token) {
        self.token_stream.push(token);
    }

    /// Emits text, merging it into the previous token when that is text too.
    /// Runs split by a non-tag `<` stay one token.
    pub(super) fn emit_text(&mut self, text: &str) {
        if let Some(Token::Text(previous)) = self.token_stream.last_mut() {
            previous.push_str(text);
        } else {
            self.emit(Token::Text(text.to_string()));
        }
    }

    /// Consumes the `<` at the cursor and enters a tag.
    pub(super) fn emit_open_tag_mark(&mut self) {
        let _ = self.consume();
        self.tag_depth += 1;
        self.emit(Token::OpenTagMark);
    }

    /// Emits the slot that follows segment `index`.
    pub(super) fn emit_slot(&mut self, index: usize) {
        if self.quote.is_some() {
            self.emit(Token::AttributeExpressionSlot(index));
        } else {
            self.emit(Token::ExpressionSlot(index));
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl TemplateTokenizer<'_> {
    /// Reports a character inside a tag that fits no rule. The tokenizer
    /// never fails; the character is dropped.
    /// The message carries no position, so a character is reported once per
    /// process.
    pub(super) fn log_skipped_character(c: char) {
        warn_once(
            "Tokenizer",
            &format!("skipped unexpected character {c:?} inside a tag"),
        );
    }
}
