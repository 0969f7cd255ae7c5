//! End-to-end rewriting: parse, replace nodes, serialize.

mod common;
use common::*;

use std::collections::HashMap;
use std::fmt;

use oxide_sqlp::{Node, Nodes, first_leaf, parse, try_walk_deep_mut, walk_deep, walk_deep_mut};

#[test]
fn replace_bracketed_table() {
    let mut parsed = round_trip("select * from [bracketed] where col1 = 123");
    for node in parsed.iter_mut() {
        if matches!(node, Node::Brackets(_)) {
            *node = Node::text("(select * from some_table where col2 = '456') as _");
        }
    }
    assert_eq!(
        parsed.to_string(),
        "select * from (select * from some_table where col2 = '456') as _ where col1 = 123"
    );
}

#[test]
fn replace_bracketed_table_with_parsed_subquery() {
    let mut parsed = parse_ok("select * from [bracketed] where col1 = 123");
    let subquery = parse_ok("(select * from some_table where col2 = '456') as _");
    for node in parsed.iter_mut() {
        if matches!(node, Node::Brackets(_)) {
            *node = Node::Nodes(subquery.clone());
        }
    }
    assert_eq!(
        parsed.to_string(),
        "select * from (select * from some_table where col2 = '456') as _ where col1 = 123"
    );
}

/// Renumbers named parameters as ordinals, reusing the ordinal of a name
/// seen before. Returns the names in ordinal order.
fn named_to_ordinal(nodes: &mut Nodes) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    walk_deep_mut(nodes, |node| {
        if let Node::NamedParam(name) = node {
            let index = names.iter().position(|known| known == name).unwrap_or_else(|| {
                names.push(name.clone());
                names.len() - 1
            });
            *node = Node::ordinal(i64::try_from(index).unwrap() + 1);
        }
    });
    names
}

#[test]
fn named_params_to_ordinals() {
    let mut parsed = parse_ok(
        "select * from users where id = :id and (org = :org or owner = :id) -- :ignored\n",
    );
    let names = named_to_ordinal(&mut parsed);
    assert_eq!(names, ["id", "org"]);
    assert_eq!(
        parsed.to_string(),
        "select * from users where id = $1 and (org = $2 or owner = $1) -- :ignored\n"
    );
}

#[test]
fn named_params_keep_casts() {
    let mut parsed = parse_ok("insert into t values (:a::uuid, :b::jsonb, ':c')");
    named_to_ordinal(&mut parsed);
    assert_eq!(
        parsed.to_string(),
        "insert into t values ($1::uuid, $2::jsonb, ':c')"
    );
}

#[test]
fn ordinals_to_named_arguments() {
    let args: HashMap<usize, &str> = [(0, "first"), (1, "second")].into_iter().collect();
    let mut parsed = parse_ok("select $2, $1, $3");
    let result = try_walk_deep_mut(&mut parsed, |node| {
        let Some(index) = node.ordinal_index() else {
            return Ok(());
        };
        match args.get(&index) {
            Some(name) => {
                *node = Node::named_param(*name);
                Ok(())
            }
            None => Err(index),
        }
    });
    assert_eq!(result, Err(2));
    // Nodes before the failing one are already rewritten.
    assert_eq!(parsed.to_string(), "select :second, :first, $3");
}

#[derive(Debug, Clone)]
struct Placeholder;

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("?")
    }
}

#[derive(Debug, Clone)]
struct ExpandedList(Vec<i64>);

impl fmt::Display for ExpandedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[test]
fn substitute_fragments() {
    let mut parsed = parse_ok("select * from t where a = :a and b in (:list)");
    walk_deep_mut(&mut parsed, |node| {
        let replacement = match node {
            Node::NamedParam(name) if name == "list" => Node::fragment(ExpandedList(vec![1, 2, 3])),
            Node::NamedParam(_) => Node::fragment(Placeholder),
            _ => return,
        };
        *node = replacement;
    });
    assert_eq!(
        parsed.to_string(),
        "select * from t where a = ? and b in (1, 2, 3)"
    );

    // Fragments are leaves.
    let mut fragments = 0;
    walk_deep(&parsed, |node| {
        if matches!(node, Node::Fragment(_)) {
            fragments += 1;
        }
    });
    assert_eq!(fragments, 2);
}

#[test]
fn fragment_copies_are_equal() {
    let parsed = nodes([text("a = "), Node::fragment(Placeholder)]);
    let copy = parsed.clone();
    assert_eq!(parsed, copy);
    assert_eq!(copy.to_string(), "a = ?");
}

#[test]
fn strip_comments() {
    let mut parsed = parse_ok("select 1 -- one\n/* two */ + 2");
    walk_deep_mut(&mut parsed, |node| {
        if matches!(node, Node::CommentLine(_) | Node::CommentBlock(_)) {
            *node = Node::text("");
        }
    });
    assert_eq!(parsed.to_string(), "select 1 \n + 2");
}

#[test]
fn rewrite_braced_template() {
    let mut parsed = parse_ok("select {columns} from t");
    for node in parsed.iter_mut() {
        let replacement = match node {
            Node::Braces(inner) if inner.to_string() == "columns" => "id, name",
            _ => continue,
        };
        *node = Node::text(replacement);
    }
    assert_eq!(parsed.to_string(), "select id, name from t");
    assert_eq!(first_leaf(&parsed), Some(&text("select")));
}

#[test]
fn parse_is_deterministic() {
    let sql = "with x as (select $1::int) select * from x where y = :y";
    assert_eq!(parse(sql), parse(sql));
}
