//! Tests for caller-supplied parse options: void and raw-text elements,
//! strict closing tags, whitespace policy.

use slate_markup::{Element, Node, ParseOptions, Root, SyntaxError, TokenKind, WhitespaceMode};

fn parse_with(segments: &[&str], options: &ParseOptions) -> Result<Root, SyntaxError> {
    slate_markup::parse_with_options(segments, segments.len().saturating_sub(1), options)
}

/// Helper to parse with the HTML element tables
fn parse_html(segments: &[&str]) -> Root {
    parse_with(segments, &ParseOptions::html()).expect("template should parse")
}

fn only_element(root: &Root) -> &Element {
    assert_eq!(root.children.len(), 1, "expected one top-level node: {root:?}");
    root.children[0].as_element().expect("top-level element")
}

fn element_names(children: &[Node]) -> Vec<&str> {
    children
        .iter()
        .filter_map(Node::as_element)
        .map(|element| element.name.as_str())
        .collect()
}

fn text(value: &str) -> Node {
    Node::Text(slate_markup::Text::new(value))
}

// ========== defaults ==========

#[test]
fn test_default_options() {
    let options = ParseOptions::default();
    assert!(!options.strict_closing_tags());
    assert_eq!(options.whitespace(), WhitespaceMode::Trim);
    assert!(!options.is_void_element("br"));
    assert!(!options.has_raw_text_elements());
    assert_eq!(options, ParseOptions::new());
}

#[test]
fn test_html_tables_are_case_insensitive() {
    let options = ParseOptions::html();
    assert!(options.is_void_element("BR"));
    assert!(options.is_void_element("img"));
    assert!(options.is_raw_text_element("Script"));
    assert!(!options.is_raw_text_element("div"));
}

#[test]
fn test_whitespace_mode_names() {
    assert_eq!("preserve".parse::<WhitespaceMode>(), Ok(WhitespaceMode::Preserve));
    assert_eq!("trim".parse::<WhitespaceMode>(), Ok(WhitespaceMode::Trim));
    assert!("collapse".parse::<WhitespaceMode>().is_err());
    assert_eq!(WhitespaceMode::Trim.to_string(), "trim");
}

// ========== void elements ==========

#[test]
fn test_void_element_needs_no_closing_tag() {
    let root = parse_html(&[r#"<div><br><input value="x"></div>"#]);
    let div = only_element(&root);
    assert_eq!(element_names(&div.children), vec!["br", "input"]);
    for child in &div.children {
        let element = child.as_element().expect("element");
        assert!(!element.self_closing);
        assert!(element.children.is_empty());
    }
}

#[test]
fn test_void_element_name_is_case_insensitive() {
    let root = parse_html(&["<p><BR>x</p>"]);
    assert_eq!(element_names(&only_element(&root).children), vec!["BR"]);
}

#[test]
fn test_void_element_consumes_matching_closing_tag() {
    let root = parse_html(&["<p>a<br></br>b</p>"]);
    let p = only_element(&root);
    assert_eq!(p.children.len(), 3);
    assert_eq!(p.children[0], text("a"));
    assert_eq!(p.children[2], text("b"));
}

#[test]
fn test_void_element_leaves_parent_closing_tag() {
    let root = parse_html(&["<p><br></p>"]);
    assert_eq!(element_names(&only_element(&root).children), vec!["br"]);
}

#[test]
fn test_void_element_can_still_self_close() {
    let root = parse_html(&["<img src=", " />"]);
    let img = only_element(&root);
    assert!(img.self_closing);
    assert_eq!(img.slot_references(), vec![0]);
}

#[test]
fn test_unclosed_br_fails_without_options() {
    let err = slate_markup::parse(&["<p><br></p>"], 0).unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedEnd {
            expected: TokenKind::OpenTagMark
        }
    );
}

#[test]
fn test_custom_void_elements() {
    let options = ParseOptions::new().with_void_elements(["Marker"]);
    let root = parse_with(&["<list><marker><item /></list>"], &options).expect("parse");
    assert_eq!(
        element_names(&only_element(&root).children),
        vec!["marker", "item"]
    );
}

// ========== raw-text elements ==========

#[test]
fn test_script_body_is_one_text_node() {
    let root = parse_html(&["<script>if (a < b && c) { x = '<p>'; }</script>"]);
    let script = only_element(&root);
    assert_eq!(script.children, vec![text("if (a < b && c) { x = '<p>'; }")]);
}

#[test]
fn test_raw_text_with_slot() {
    let root = parse_html(&["<style>.a { color: ", " }</style>"]);
    let style = only_element(&root);
    assert_eq!(style.children.len(), 3);
    assert_eq!(style.children[0], text(".a { color: "));
    assert_eq!(style.children[1].as_slot(), Some(0));
    assert_eq!(style.children[2], text(" }"));
}

#[test]
fn test_textarea_keeps_markup_as_text() {
    let root = parse_html(&["<textarea><b>bold</b></textarea>"]);
    assert_eq!(only_element(&root).children, vec![text("<b>bold</b>")]);
}

#[test]
fn test_custom_raw_text_elements() {
    let options = ParseOptions::new().with_raw_text_elements(["code"]);
    let root = parse_with(&["<code><div></code>"], &options).expect("parse");
    assert_eq!(only_element(&root).children, vec![text("<div>")]);
}

// ========== strict closing tags ==========

#[test]
fn test_strict_mode_rejects_mismatched_closing_tag() {
    let options = ParseOptions::new().with_strict_closing_tags(true);
    let err = parse_with(&["<div></span>"], &options).unwrap_err();
    assert_eq!(
        err,
        SyntaxError::MismatchedClosingTag {
            expected: "div".to_string(),
            found: "span".to_string(),
            position: 5,
        }
    );
    assert_eq!(err.expected_kind(), None);
    assert_eq!(
        err.to_string(),
        "closing tag </span> does not match <div> at token 5"
    );
}

#[test]
fn test_strict_mode_compares_names_exactly() {
    let options = ParseOptions::new().with_strict_closing_tags(true);
    assert!(parse_with(&["<div><p></p></div>"], &options).is_ok());
    assert!(parse_with(&["<div></DIV>"], &options).is_err());
}

// ========== whitespace ==========

#[test]
fn test_preserve_keeps_every_text_node() {
    let options = ParseOptions::new().with_whitespace(WhitespaceMode::Preserve);
    let root = parse_with(&["\n<div>\n</div>\n"], &options).expect("parse");
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.children[0], text("\n"));
    assert_eq!(
        root.children[1].as_element().map(|div| div.children.clone()),
        Some(vec![text("\n")])
    );
    assert_eq!(root.children[2], text("\n"));
}

#[test]
fn test_trim_drops_the_same_nodes_preserve_keeps() {
    let segments = ["\n<ul>\n  <li>", "</li>\n</ul>\n"];
    let trimmed = parse_with(&segments, &ParseOptions::new()).expect("parse");
    let preserved = parse_with(
        &segments,
        &ParseOptions::new().with_whitespace(WhitespaceMode::Preserve),
    )
    .expect("parse");

    assert_eq!(trimmed.children.len(), 1);
    assert_eq!(preserved.children.len(), 3);
    assert_eq!(trimmed.slot_references(), preserved.slot_references());
}

#[test]
fn test_void_closing_tag_is_reported() {
    let _ = parse_html(&["<p><hr></hr></p>"]);
    assert!(slate_common::warning::was_warned(
        "Parser",
        "void element <hr> has an explicit closing tag"
    ));
}
