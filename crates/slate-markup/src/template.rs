//! Templates held as a single source string.
//!
//! Hosts with tagged templates hand the parser literal segments directly.
//! Everyone else (the CLI, tests, config files) writes one string with
//! `${...}` placeholders and lets [`Template::from_source`] split it.

use slate_ast::Root;

use crate::options::ParseOptions;
use crate::parser::SyntaxError;
use crate::tokenizer::Token;

/// Literal segments with one slot between each adjacent pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<String>,
}

impl Template {
    /// Build a template from explicit segments.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `source` on `${...}` placeholders.
    ///
    /// The placeholder body is discarded; only its position matters. Braces
    /// inside the body are balanced, so `${ {a: 1} }` is one placeholder,
    /// and braces inside quoted strings are ignored, so `${"}"}` is too.
    /// `\${` is a literal `${`, and an unterminated `${` is kept as text.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = source;

        while let Some(start) = rest.find("${") {
            let (before, after) = (&rest[..start], &rest[start + 2..]);

            if let Some(literal) = before.strip_suffix('\\') {
                current.push_str(literal);
                current.push_str("${");
                rest = after;
                continue;
            }

            let Some(end) = placeholder_end(after) else {
                break;
            };
            current.push_str(before);
            segments.push(std::mem::take(&mut current));
            rest = &after[end + 1..];
        }

        current.push_str(rest);
        segments.push(current);
        Self { segments }
    }

    /// The literal segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of slots: one fewer than the number of segments.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Tokenize with default options.
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token> {
        crate::tokenize(&self.segments, self.slot_count())
    }

    /// Parse with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the markup is malformed.
    pub fn parse(&self) -> Result<Root, SyntaxError> {
        crate::parse(&self.segments, self.slot_count())
    }

    /// Parse with the given options.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the markup is malformed.
    pub fn parse_with_options(&self, options: &ParseOptions) -> Result<Root, SyntaxError> {
        crate::parse_with_options(&self.segments, self.slot_count(), options)
    }
}

/// Byte offset of the `}` that closes a placeholder body.
///
/// Braces inside `"..."`, `'...'` and `` `...` `` spans are not counted. A
/// backslash escapes the next character inside a span.
fn placeholder_end(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (offset, c) in body.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' if depth == 0 => return Some(offset),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}
