//! Integration tests for the template tokenizer.

use slate_markup::{ParseOptions, TemplateTokenizer, Token, TokenKind, tokenizer::TokenizerState};

/// Helper to tokenize segments with one slot between each pair
fn tokenize(segments: &[&str]) -> Vec<Token> {
    slate_markup::tokenize(segments, segments.len().saturating_sub(1))
}

/// Helper to tokenize with the HTML element tables
fn tokenize_html(segments: &[&str]) -> Vec<Token> {
    slate_markup::tokenize_with_options(
        segments,
        segments.len().saturating_sub(1),
        &ParseOptions::html(),
    )
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn text(value: &str) -> Token {
    Token::Text(value.to_string())
}

fn attr(value: &str) -> Token {
    Token::AttributeValue(value.to_string())
}

// ========== tags ==========

#[test]
fn test_empty_element() {
    let tokens = tokenize(&["<div></div>"]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("div"),
            Token::CloseTagMark,
            Token::OpenTagMark,
            Token::Slash,
            ident("div"),
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_self_closing_tag_with_whitespace() {
    let tokens = tokenize(&["<input\n   checked />"]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("input"),
            ident("checked"),
            Token::Slash,
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_identifier_characters() {
    let tokens = tokenize(&["<App.Header xlink:href data-id my_prop />"]);
    let names: Vec<_> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Identifier(name) => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["App.Header", "xlink:href", "data-id", "my_prop"]);
}

#[test]
fn test_unexpected_character_in_tag_is_skipped() {
    let tokens = tokenize(&["<div @click></div>"]);
    assert_eq!(&tokens[..3], &[Token::OpenTagMark, ident("div"), ident("click")]);
    assert!(!tokens.iter().any(|token| token.is(TokenKind::Text)));
}

// ========== text ==========

#[test]
fn test_text_is_verbatim() {
    let tokens = tokenize(&["  Hello\n  World  "]);
    assert_eq!(tokens, vec![text("  Hello\n  World  ")]);
}

#[test]
fn test_lone_angle_bracket_stays_in_text() {
    // "<" followed by a space or "=" opens nothing
    let tokens = tokenize(&["a < b <= c"]);
    assert_eq!(tokens, vec![text("a < b <= c")]);
}

#[test]
fn test_text_around_elements() {
    let tokens = tokenize(&["Hi <b>there</b>!"]);
    assert_eq!(tokens.first(), Some(&text("Hi ")));
    assert_eq!(tokens.last(), Some(&text("!")));
    assert!(tokens.contains(&text("there")));
}

// ========== quoted values ==========

#[test]
fn test_double_and_single_quotes() {
    let tokens = tokenize(&[r#"<a x="1" y='2'>"#]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("a"),
            ident("x"),
            Token::Equals,
            Token::QuoteMark('"'),
            attr("1"),
            Token::QuoteMark('"'),
            ident("y"),
            Token::Equals,
            Token::QuoteMark('\''),
            attr("2"),
            Token::QuoteMark('\''),
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_other_quote_and_markup_inside_value() {
    let tokens = tokenize(&[r#"<a title="it's <b>/x=1">"#]);
    assert!(tokens.contains(&attr("it's <b>/x=1")));
    assert_eq!(tokens.last(), Some(&Token::CloseTagMark));
}

#[test]
fn test_empty_quoted_value_has_no_value_token() {
    let tokens = tokenize(&[r#"<a b="">"#]);
    assert_eq!(
        &tokens[3..6],
        &[Token::Equals, Token::QuoteMark('"'), Token::QuoteMark('"')]
    );
}

// ========== slots ==========

#[test]
fn test_slot_inside_quotes_is_attribute_slot() {
    let tokens = tokenize(&["<div class=\"btn ", "\">", "</div>"]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("div"),
            ident("class"),
            Token::Equals,
            Token::QuoteMark('"'),
            attr("btn "),
            Token::AttributeExpressionSlot(0),
            Token::QuoteMark('"'),
            Token::CloseTagMark,
            Token::ExpressionSlot(1),
            Token::OpenTagMark,
            Token::Slash,
            ident("div"),
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_unquoted_and_spread_slots() {
    let tokens = tokenize(&["<input value=", " ", " />"]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("input"),
            ident("value"),
            Token::Equals,
            Token::ExpressionSlot(0),
            Token::ExpressionSlot(1),
            Token::Slash,
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_slots_are_numbered_in_order() {
    let tokens = tokenize(&["", "", "", ""]);
    let slots: Vec<_> = tokens.iter().filter_map(Token::slot).collect();
    assert_eq!(slots, vec![0, 1, 2]);
}

#[test]
fn test_extra_declared_slots_are_ignored() {
    let tokens = slate_markup::tokenize(&["a", "b"], 5);
    assert_eq!(tokens, vec![text("a"), Token::ExpressionSlot(0), text("b")]);
}

#[test]
fn test_missing_slots_join_segments() {
    let tokens = slate_markup::tokenize(&["a", "b"], 0);
    assert_eq!(tokens, vec![text("ab")]);
}

#[test]
fn test_no_segments() {
    let tokens = slate_markup::tokenize::<&str>(&[], 0);
    assert!(tokens.is_empty());
}

// ========== state ==========

#[test]
fn test_state_after_unterminated_input() {
    let segments = ["<div class=\"open"];
    let mut tokenizer = TemplateTokenizer::new(&segments, 0);
    tokenizer.run();
    assert_eq!(tokenizer.state(), TokenizerState::AttributeValue);

    let segments = ["<div"];
    let mut tokenizer = TemplateTokenizer::new(&segments, 0);
    tokenizer.run();
    assert_eq!(tokenizer.state(), TokenizerState::Tag);

    let segments = ["<div>"];
    let mut tokenizer = TemplateTokenizer::new(&segments, 0);
    tokenizer.run();
    assert_eq!(tokenizer.state(), TokenizerState::Data);
}

#[test]
fn test_state_names() {
    assert_eq!(TokenizerState::AttributeValue.to_string(), "AttributeValue");
    assert_eq!(TokenizerState::RawText.to_string(), "RawText");
}

// ========== raw text ==========

#[test]
fn test_script_body_is_raw_text() {
    let tokens = tokenize_html(&[r#"<script>if (a<b) { x = "<div>"; }</script>"#]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("script"),
            Token::CloseTagMark,
            text(r#"if (a<b) { x = "<div>"; }"#),
            Token::OpenTagMark,
            Token::Slash,
            ident("script"),
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_raw_text_closing_tag_is_case_insensitive() {
    let tokens = tokenize_html(&["<STYLE>a{}</style>"]);
    assert_eq!(tokens[3], text("a{}"));
    assert_eq!(tokens[6], ident("style"));
}

#[test]
fn test_raw_text_ignores_longer_tag_names() {
    let tokens = tokenize_html(&["<style>a</styles></style>"]);
    assert_eq!(tokens[3], text("a</styles>"));
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_raw_text_spans_slots() {
    let tokens = tokenize_html(&["<title>Hi ", "</title>"]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagMark,
            ident("title"),
            Token::CloseTagMark,
            text("Hi "),
            Token::ExpressionSlot(0),
            Token::OpenTagMark,
            Token::Slash,
            ident("title"),
            Token::CloseTagMark,
        ]
    );
}

#[test]
fn test_self_closed_raw_text_element_has_no_body() {
    let tokens = tokenize_html(&["<script /><b>x</b>"]);
    assert!(tokens.contains(&ident("b")));
    assert!(tokens.contains(&text("x")));
}

#[test]
fn test_script_is_markup_without_options() {
    let tokens = tokenize(&["<script><b></b></script>"]);
    assert!(tokens.contains(&ident("b")));
}

// ========== display ==========

#[test]
fn test_token_display() {
    assert_eq!(ident("div").to_string(), "Identifier(div)");
    assert_eq!(text("a\n").to_string(), r#"Text("a\n")"#);
    assert_eq!(Token::QuoteMark('\'').to_string(), "QuoteMark(')");
    assert_eq!(
        Token::AttributeExpressionSlot(2).to_string(),
        "AttributeExpressionSlot(2)"
    );
}

#[test]
fn test_token_kind() {
    assert_eq!(Token::ExpressionSlot(0).kind(), TokenKind::ExpressionSlot);
    assert!(attr("x").is(TokenKind::AttributeValue));
    assert_eq!(TokenKind::OpenTagMark.to_string(), "OpenTagMark");
    assert_eq!(Token::Equals.slot(), None);
}

#[test]
fn test_tokens_serialize_with_type_tag() {
    let json = serde_json::to_value(tokenize(&["<a ", ">"])).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([
            { "type": "OpenTagMark" },
            { "type": "Identifier", "value": "a" },
            { "type": "ExpressionSlot", "value": 0 },
            { "type": "CloseTagMark" },
        ])
    );
}

// ========== warnings ==========

#[test]
fn test_skipped_character_is_reported() {
    let _ = tokenize(&["<div !>"]);
    assert!(slate_common::warning::was_warned(
        "Tokenizer",
        "skipped unexpected character '!' inside a tag"
    ));
}

#[test]
fn test_skipped_character_warning_has_no_position() {
    let _ = tokenize(&["<div   ~>"]);
    let _ = tokenize(&["<span ~ ~>"]);
    assert!(slate_common::warning::was_warned(
        "Tokenizer",
        "skipped unexpected character '~' inside a tag"
    ));
}

#[test]
fn test_slot_count_warnings_do_not_depend_on_counts() {
    let _ = slate_markup::tokenize(&["a", "b"], 5);
    let _ = slate_markup::tokenize(&["a", "b", "c"], 9);
    assert!(slate_common::warning::was_warned(
        "Tokenizer",
        "more slots declared than fit between segments; extra slots are ignored"
    ));

    let _ = slate_markup::tokenize(&["a", "b", "c"], 0);
    let _ = slate_markup::tokenize(&["a", "b", "c", "d"], 1);
    assert!(slate_common::warning::was_warned(
        "Tokenizer",
        "fewer slots declared than gaps between segments; trailing segments are joined"
    ));
}
