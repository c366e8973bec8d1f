use slate_ast::{Element, Expression, Node, Prop, Root, Text};
use slate_common::warning::warn_once;

use super::error::SyntaxError;
use super::value::ValueBuilder;
use crate::options::ParseOptions;
use crate::tokenizer::{Token, TokenKind};

/// An element whose start tag has been read but whose closing tag has not.
struct OpenElement {
    name: String,
    props: Vec<Prop>,
    children: Vec<Node>,
}

/// What a start tag produced.
enum StartTag {
    /// Self-closed or void: the element is finished.
    Complete(Element),
    /// Children follow up to a closing tag.
    Open(OpenElement),
}

/// Parser over a token stream.
///
/// The grammar is LL(1) except for one spot: `<` followed by `/` ends a child
/// list, so the parser peeks two tokens there. Element nesting is tracked on
/// an explicit stack of open elements, so input depth is bounded by memory
/// rather than by the call stack.
///
/// ```text
/// Root      := Node*
/// Node      := Element | Text | Expression
/// Element   := "<" Identifier Prop* ( "/" ">" | ">" Node* "<" "/" Identifier ">" )
/// Prop      := ExpressionSlot | Identifier ( "=" AttrValue )?
/// AttrValue := Quote ( AttributeValue | AttributeExpressionSlot )* Quote | ExpressionSlot
/// ```
pub struct TemplateParser {
    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,
    /// Current position in the token stream. Never moves backwards.
    position: usize,
    options: ParseOptions,
    /// Innermost last.
    stack_of_open_elements: Vec<OpenElement>,
    /// Finished top-level nodes.
    root_children: Vec<Node>,
}

impl TemplateParser {
    /// Create a parser from a token stream, with default options.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            options: ParseOptions::default(),
            stack_of_open_elements: Vec::new(),
            root_children: Vec::new(),
        }
    }

    /// Use `options` for void elements, closing tag checks and whitespace.
    #[must_use]
    pub fn with_options(mut self, options: &ParseOptions) -> Self {
        self.options = options.clone();
        self
    }

    /// Parse the whole stream into a tree.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] at the first token that does not fit the
    /// grammar, or if the stream ends inside an element.
    pub fn run(mut self) -> Result<Root, SyntaxError> {
        loop {
            // "</" closes the innermost open element. At the top level there
            // is nothing to close; parse_start_tag reports it as a Slash
            // where an Identifier was expected.
            if self.at_closing_tag()
                && let Some(element) = self.stack_of_open_elements.pop()
            {
                let element = self.close_element(element)?;
                self.attach(element.into());
                continue;
            }

            let node = match self.peek() {
                None => break,
                Some(Token::Text(text)) => {
                    let node = Text::new(text.clone());
                    self.position += 1;
                    node.into()
                }
                Some(Token::ExpressionSlot(slot)) => {
                    let node = Expression::new(*slot);
                    self.position += 1;
                    node.into()
                }
                Some(Token::OpenTagMark) => match self.parse_start_tag()? {
                    StartTag::Complete(element) => element.into(),
                    StartTag::Open(element) => {
                        self.stack_of_open_elements.push(element);
                        continue;
                    }
                },
                Some(_) => return Err(self.unexpected(TokenKind::OpenTagMark)),
            };
            self.attach(node);
        }

        // Input ended with elements still open: the closing tag is missing
        if !self.stack_of_open_elements.is_empty() {
            return Err(self.unexpected(TokenKind::OpenTagMark));
        }

        let mut children = std::mem::take(&mut self.root_children);
        self.options.whitespace().apply(&mut children);
        Ok(Root::new(children))
    }

    // =========================================================================
    // Elements
    // =========================================================================

    /// Add a finished node to the innermost open element, or to the root.
    fn attach(&mut self, node: Node) {
        match self.stack_of_open_elements.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root_children.push(node),
        }
    }

    fn parse_start_tag(&mut self) -> Result<StartTag, SyntaxError> {
        // STEP 1: "<" name
        self.expect(TokenKind::OpenTagMark)?;
        let name = self.expect_identifier()?;

        // STEP 2: Props up to "/" or ">"
        let props = self.parse_props()?;

        // STEP 3: "/>" closes the element with no children
        if self.next_is(TokenKind::Slash) {
            self.position += 1;
            self.expect(TokenKind::CloseTagMark)?;
            return Ok(StartTag::Complete(Element::self_closed(name, props)));
        }
        self.expect(TokenKind::CloseTagMark)?;

        // STEP 4: Void elements end at their ">"
        if self.options.is_void_element(&name) {
            self.skip_void_closing_tag(&name);
            return Ok(StartTag::Complete(Element::new(name, props, Vec::new())));
        }

        // STEP 5: Children follow, up to the matching "</"
        Ok(StartTag::Open(OpenElement {
            name,
            props,
            children: Vec::new(),
        }))
    }

    /// Consume the closing tag of `element` and finish it.
    fn close_element(&mut self, mut element: OpenElement) -> Result<Element, SyntaxError> {
        self.parse_closing_tag(&element.name)?;
        self.options.whitespace().apply(&mut element.children);
        Ok(Element::new(element.name, element.props, element.children))
    }

    /// `"<" "/" Identifier ">"`. The name is only compared in strict mode.
    fn parse_closing_tag(&mut self, name: &str) -> Result<(), SyntaxError> {
        self.expect(TokenKind::OpenTagMark)?;
        self.expect(TokenKind::Slash)?;
        let position = self.position;
        let closing = self.expect_identifier()?;
        if self.options.strict_closing_tags() && closing != name {
            return Err(SyntaxError::MismatchedClosingTag {
                expected: name.to_string(),
                found: closing,
                position,
            });
        }
        self.expect(TokenKind::CloseTagMark)
    }

    /// A void element needs no closing tag, but `<br></br>` is common enough
    /// to accept: a matching closing tag right after the `>` is consumed.
    fn skip_void_closing_tag(&mut self, name: &str) {
        let matches = self.at_closing_tag()
            && matches!(
                self.tokens.get(self.position + 2),
                Some(Token::Identifier(closing)) if closing.eq_ignore_ascii_case(name)
            )
            && self.tokens.get(self.position + 3) == Some(&Token::CloseTagMark);
        if matches {
            self.position += 4;
            warn_once(
                "Parser",
                &format!("void element <{name}> has an explicit closing tag"),
            );
        }
    }

    // =========================================================================
    // Props
    // =========================================================================

    fn parse_props(&mut self) -> Result<Vec<Prop>, SyntaxError> {
        let mut props = Vec::new();
        loop {
            match self.peek() {
                None | Some(Token::CloseTagMark | Token::Slash) => break,
                // A bare slot in prop position is a spread
                Some(Token::ExpressionSlot(slot)) => {
                    let prop = Prop::Spread { slot: *slot };
                    self.position += 1;
                    props.push(prop);
                }
                Some(_) => props.push(self.parse_named_prop()?),
            }
        }
        Ok(props)
    }

    fn parse_named_prop(&mut self) -> Result<Prop, SyntaxError> {
        let name = self.expect_identifier()?;
        if !self.next_is(TokenKind::Equals) {
            return Ok(Prop::Boolean { name });
        }
        self.position += 1;
        self.parse_prop_value(name)
    }

    /// After `name=`: either one unquoted slot or a quoted value.
    fn parse_prop_value(&mut self, name: String) -> Result<Prop, SyntaxError> {
        match self.peek() {
            Some(Token::ExpressionSlot(slot)) => {
                let prop = Prop::Expression { name, slot: *slot };
                self.position += 1;
                Ok(prop)
            }
            Some(Token::QuoteMark(quote)) => {
                let quote = *quote;
                self.position += 1;
                self.parse_quoted_value(name, quote)
            }
            _ => Err(self.unexpected(TokenKind::QuoteMark)),
        }
    }

    fn parse_quoted_value(&mut self, name: String, quote: char) -> Result<Prop, SyntaxError> {
        let mut value = ValueBuilder::default();
        loop {
            match self.peek() {
                Some(Token::AttributeValue(text)) => value.push_static(text),
                Some(Token::AttributeExpressionSlot(slot)) => value.push_slot(*slot),
                Some(Token::QuoteMark(_)) => {
                    self.position += 1;
                    return Ok(value.finish(name, quote));
                }
                _ => return Err(self.unexpected(TokenKind::QuoteMark)),
            }
            self.position += 1;
        }
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn next_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.is(kind))
    }

    /// `<` immediately followed by `/`.
    fn at_closing_tag(&self) -> bool {
        self.next_is(TokenKind::OpenTagMark)
            && self.tokens.get(self.position + 1) == Some(&Token::Slash)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.next_is(kind) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.unexpected(kind))
        }
    }

    fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        match self.peek() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.position += 1;
                Ok(name)
            }
            _ => Err(self.unexpected(TokenKind::Identifier)),
        }
    }

    fn unexpected(&self, expected: TokenKind) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::UnexpectedToken {
                expected,
                found: token.kind(),
                position: self.position,
            },
            None => SyntaxError::UnexpectedEnd { expected },
        }
    }
}
