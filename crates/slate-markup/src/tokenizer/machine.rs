use strum_macros::Display;

use slate_common::warning::warn_once;

use super::token::Token;
use crate::options::ParseOptions;

/// The tokenizer's mode, derived from its quote, tag-depth and raw-text
/// state. Each mode has one handler in the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Outside any tag: text up to the next tag opener.
    Data,
    /// Between `<` and `>`: names, `=`, `/`, quotes. Whitespace is skipped.
    Tag,
    /// Inside a quoted prop value: text up to the matching quote.
    AttributeValue,
    /// Inside the body of a raw-text element: text up to its closing tag.
    RawText,
}

/// Converts literal segments and the slots between them into a token
/// stream.
///
/// The tokenizer is total: any input produces some token stream, and
/// malformed markup is left for the parser to reject. State is carried
/// across segments, so a slot that falls inside an open quote is emitted as
/// [`Token::AttributeExpressionSlot`] and every other slot as
/// [`Token::ExpressionSlot`].
pub struct TemplateTokenizer<'a> {
    pub(super) segments: Vec<&'a str>,
    pub(super) slot_count: usize,
    pub(super) options: ParseOptions,
    /// The segment being scanned.
    pub(super) input: &'a str,
    /// Byte offset into `input`.
    pub(super) cursor: usize,
    /// The quote character of the open prop value, if any.
    pub(super) quote: Option<char>,
    /// Incremented on every tag opener (`<div` and `</div` alike),
    /// decremented on every `>` seen inside a tag.
    pub(super) tag_depth: usize,
    /// Lowercased name whose closing tag ends the current raw-text body.
    pub(super) raw_text_end: Option<String>,
    pub(super) token_stream: Vec<Token>,
}

impl<'a> TemplateTokenizer<'a> {
    /// Create a tokenizer for `segments`, with one slot between each pair of
    /// adjacent segments.
    ///
    /// `slot_count` should be `segments.len() - 1`. Extra slots cannot be
    /// placed and are ignored; missing slots leave the trailing segments
    /// joined. Either case is reported as a warning.
    #[must_use]
    pub fn new<S: AsRef<str>>(segments: &'a [S], slot_count: usize) -> Self {
        Self {
            segments: segments.iter().map(AsRef::as_ref).collect(),
            slot_count,
            options: ParseOptions::default(),
            input: "",
            cursor: 0,
            quote: None,
            tag_depth: 0,
            raw_text_end: None,
            token_stream: Vec::new(),
        }
    }

    /// Use the raw-text element table from `options`. Other options only
    /// affect the parser.
    #[must_use]
    pub fn with_options(mut self, options: &ParseOptions) -> Self {
        self.options = options.clone();
        self
    }

    /// The current mode.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        if self.raw_text_end.is_some() {
            TokenizerState::RawText
        } else if self.quote.is_some() {
            TokenizerState::AttributeValue
        } else if self.tag_depth > 0 {
            TokenizerState::Tag
        } else {
            TokenizerState::Data
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after [`run`](Self::run) to get the tokens for the parser.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Tokenize every segment, emitting a slot token after each segment
    /// except the last.
    pub fn run(&mut self) {
        let slots = self.placeable_slots();
        let segments = std::mem::take(&mut self.segments);
        for (index, segment) in segments.iter().copied().enumerate() {
            self.input = segment;
            self.cursor = 0;

            while self.cursor < self.input.len() {
                match self.state() {
                    TokenizerState::Data => self.handle_data_state(),
                    TokenizerState::Tag => self.handle_tag_state(),
                    TokenizerState::AttributeValue => self.handle_attribute_value_state(),
                    TokenizerState::RawText => self.handle_raw_text_state(),
                }
            }

            if index < slots {
                self.emit_slot(index);
            }
        }
        self.segments = segments;
    }

    fn placeable_slots(&self) -> usize {
        let gaps = self.segments.len().saturating_sub(1);
        if self.slot_count > gaps {
            warn_once(
                "Tokenizer",
                "more slots declared than fit between segments; extra slots are ignored",
            );
        } else if self.slot_count < gaps {
            warn_once(
                "Tokenizer",
                "fewer slots declared than gaps between segments; trailing segments are joined",
            );
        }
        self.slot_count.min(gaps)
    }

    /// Outside any tag.
    fn handle_data_state(&mut self) {
        if self.at_tag_open() {
            self.emit_open_tag_mark();
            return;
        }

        // The first character is text even when it is a '<' that opens
        // nothing, so the run always makes progress.
        let start = self.cursor;
        let _ = self.consume();
        while self.peek().is_some() && !self.at_tag_open() {
            let _ = self.consume();
        }
        let input = self.input;
        self.emit_text(&input[start..self.cursor]);
    }

    /// Between `<` and `>`, outside quotes.
    fn handle_tag_state(&mut self) {
        match self.peek() {
            Some('<') if self.at_tag_open() => self.emit_open_tag_mark(),
            Some('>') => {
                let _ = self.consume();
                self.tag_depth -= 1;
                self.enter_raw_text_if_needed();
                self.emit(Token::CloseTagMark);
            }
            Some(c) if Self::is_whitespace_char(c) => {
                let _ = self.consume();
            }
            Some(quote @ ('"' | '\'')) => {
                let _ = self.consume();
                self.quote = Some(quote);
                self.emit(Token::QuoteMark(quote));
            }
            Some('/') => {
                let _ = self.consume();
                self.emit(Token::Slash);
            }
            Some('=') => {
                let _ = self.consume();
                self.emit(Token::Equals);
            }
            Some(c) if is_identifier_char(c) => {
                let name = self.consume_while(is_identifier_char);
                self.emit(Token::Identifier(name.to_string()));
            }
            Some(c) => {
                let _ = self.consume();
                Self::log_skipped_character(c);
            }
            None => {}
        }
    }

    /// Inside a quoted prop value.
    fn handle_attribute_value_state(&mut self) {
        let Some(quote) = self.quote else {
            return;
        };

        let value = self.consume_while(|c| c != quote);
        if !value.is_empty() {
            self.emit(Token::AttributeValue(value.to_string()));
        }

        if self.peek() == Some(quote) {
            let _ = self.consume();
            self.quote = None;
            self.emit(Token::QuoteMark(quote));
        }
    }

    /// Inside the body of a raw-text element.
    fn handle_raw_text_state(&mut self) {
        let Some(end_name) = self.raw_text_end.as_deref() else {
            return;
        };

        let input = self.input;
        let rest = &input[self.cursor..];
        match find_closing_tag(rest, end_name) {
            Some(offset) => {
                // STEP 1: Everything before the closing tag is body text
                if offset > 0 {
                    self.emit_text(&rest[..offset]);
                }
                // STEP 2: Leave raw text; the Data state picks up the `</`
                self.cursor += offset;
                self.raw_text_end = None;
            }
            None => {
                self.emit_text(rest);
                self.cursor = input.len();
            }
        }
    }

    /// Called on the `>` of a tag. If the tag was a start tag (not a closing
    /// or self-closing one) for a raw-text element, its body is raw text.
    fn enter_raw_text_if_needed(&mut self) {
        if !self.options.has_raw_text_elements() {
            return;
        }
        let Some(open) = self
            .token_stream
            .iter()
            .rposition(|token| *token == Token::OpenTagMark)
        else {
            return;
        };

        let tag = &self.token_stream[open + 1..];
        if let Some(Token::Identifier(name)) = tag.first()
            && tag.last() != Some(&Token::Slash)
            && self.options.is_raw_text_element(name)
        {
            self.raw_text_end = Some(name.to_ascii_lowercase());
        }
    }
}

/// Identifier characters: ASCII letters, digits, `.`, `:`, `_`, `-`.
///
/// Covers plain tags (`div`), components (`App.Header`), custom elements
/// (`my-widget`) and namespaced names (`xlink:href`).
#[must_use]
pub const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '_' | '-')
}

/// Byte offset of the first `</name` in `text` that closes `name` (ASCII
/// case-insensitive, not followed by another identifier character).
fn find_closing_tag(text: &str, name: &str) -> Option<usize> {
    text.match_indices("</").map(|(offset, _)| offset).find(|&offset| {
        let after = &text[offset + 2..];
        after
            .get(..name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            && !after[name.len()..]
                .chars()
                .next()
                .is_some_and(is_identifier_char)
    })
}
