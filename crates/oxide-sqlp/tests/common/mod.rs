#![allow(dead_code)]

use oxide_sqlp::{Node, Nodes, ParseError, parse};

pub fn parse_ok(sql: &str) -> Nodes {
    parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql:?}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse(sql).expect_err(&format!("Expected parse error for: {sql:?}"))
}

/// Verifies that serializing the parsed tree reproduces the input exactly,
/// and that parsing the output again yields the same tree.
pub fn round_trip(sql: &str) -> Nodes {
    let nodes = parse_ok(sql);
    let rendered = nodes.to_string();
    assert_eq!(rendered, sql, "Round-trip changed the source");
    let reparsed = parse_ok(&rendered);
    assert_eq!(reparsed, nodes, "Re-parse produced a different tree for {sql:?}");
    nodes
}

pub fn nodes(items: impl IntoIterator<Item = Node>) -> Nodes {
    items.into_iter().collect()
}

pub fn text(s: &str) -> Node {
    Node::text(s)
}

pub fn ws(s: &str) -> Node {
    Node::Whitespace(String::from(s))
}

pub fn sp() -> Node {
    ws(" ")
}

pub fn parens(items: impl IntoIterator<Item = Node>) -> Node {
    Node::Parens(nodes(items))
}

pub fn brackets(items: impl IntoIterator<Item = Node>) -> Node {
    Node::Brackets(nodes(items))
}

pub fn braces(items: impl IntoIterator<Item = Node>) -> Node {
    Node::Braces(nodes(items))
}
