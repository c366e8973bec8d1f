//! Caller-owned configuration that alters element closing and text handling.
//!
//! The parser is correct without any of this: by default every tag that is
//! not self-closed needs an explicit closing tag, closing tag names are not
//! checked, and whitespace-only text is trimmed per [`WhitespaceMode::Trim`].

use std::collections::BTreeSet;

use strum_macros::{Display, EnumString};

/// HTML elements that never have children.
pub const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// HTML elements whose body is text, not markup.
pub const HTML_RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// How whitespace-only text nodes are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum WhitespaceMode {
    /// Keep every text node exactly as written.
    Preserve,
    /// Within each child list, drop a whitespace-only text node when it is
    /// the first or last entry, or when it contains a line break. Text with
    /// any non-whitespace character is always kept verbatim.
    #[default]
    Trim,
}

/// Parse configuration. Build with the `with_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    void_elements: BTreeSet<String>,
    raw_text_elements: BTreeSet<String>,
    strict_closing_tags: bool,
    whitespace: WhitespaceMode,
}

impl ParseOptions {
    /// Lenient defaults: no void or raw-text elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus the HTML void and raw-text element tables.
    #[must_use]
    pub fn html() -> Self {
        Self::new()
            .with_void_elements(HTML_VOID_ELEMENTS.iter().copied())
            .with_raw_text_elements(HTML_RAW_TEXT_ELEMENTS.iter().copied())
    }

    /// Add element names that never have children. `<br>` is then complete
    /// without `/>` or `</br>`. Names compare ASCII case-insensitively.
    #[must_use]
    pub fn with_void_elements<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.void_elements
            .extend(names.into_iter().map(|name| name.as_ref().to_ascii_lowercase()));
        self
    }

    /// Add element names whose body is emitted as unparsed text up to the
    /// matching closing tag. Names compare ASCII case-insensitively.
    #[must_use]
    pub fn with_raw_text_elements<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.raw_text_elements
            .extend(names.into_iter().map(|name| name.as_ref().to_ascii_lowercase()));
        self
    }

    /// Require every closing tag name to match its opening tag name.
    #[must_use]
    pub const fn with_strict_closing_tags(mut self, strict: bool) -> Self {
        self.strict_closing_tags = strict;
        self
    }

    /// Choose the whitespace policy.
    #[must_use]
    pub const fn with_whitespace(mut self, mode: WhitespaceMode) -> Self {
        self.whitespace = mode;
        self
    }

    /// True if `name` was registered as a void element.
    #[must_use]
    pub fn is_void_element(&self, name: &str) -> bool {
        self.void_elements.contains(&name.to_ascii_lowercase())
    }

    /// True if `name` was registered as a raw-text element.
    #[must_use]
    pub fn is_raw_text_element(&self, name: &str) -> bool {
        self.raw_text_elements.contains(&name.to_ascii_lowercase())
    }

    /// True if at least one raw-text element is registered.
    #[must_use]
    pub fn has_raw_text_elements(&self) -> bool {
        !self.raw_text_elements.is_empty()
    }

    /// Whether closing tag names are checked.
    #[must_use]
    pub const fn strict_closing_tags(&self) -> bool {
        self.strict_closing_tags
    }

    /// The whitespace policy.
    #[must_use]
    pub const fn whitespace(&self) -> WhitespaceMode {
        self.whitespace
    }
}
