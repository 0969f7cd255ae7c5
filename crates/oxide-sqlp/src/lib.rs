//! # oxide-sqlp
//!
//! A lossless SQL tokenizer and parser for rewriting foreign code embedded in
//! SQL, such as parameter placeholders (`$1`, `:ident`) or code enclosed in
//! delimiters (`()`, `[]`, `{}`).
//!
//! This crate provides:
//! - A hand-written incremental tokenizer that emits primitive tokens
//! - A recursive descent parser that nests tokens by delimiter
//! - A lossless AST: serializing a parsed tree reproduces the source exactly
//! - Generic shallow/deep walks, deep copies, and first/last leaf lookup
//!
//! Only the following syntax is recognized; everything else is kept as
//! opaque text:
//!
//! - `'...'`, `"..."` and `` `...` `` quotes, without escape processing
//! - `--` line comments and `/* */` block comments
//! - the Postgres cast operator `::`
//! - ordinal parameters `$1 $2 ...` and named parameters `:identifier`
//! - `()`, `[]` and `{}`, which must nest strictly
//!
//! Recognizing quotes and comments lets the parser ignore delimiters and
//! placeholders that happen to appear inside a string, quoted identifier or
//! comment.
//!
//! ## Rewriting
//!
//! ```rust
//! use oxide_sqlp::{Node, parse, walk_deep_mut};
//!
//! let mut nodes = parse("select * from t where a = :a and b = ':b' and c = :a").unwrap();
//!
//! let mut names: Vec<String> = Vec::new();
//! walk_deep_mut(&mut nodes, |node| {
//!     if let Node::NamedParam(name) = node {
//!         let position = match names.iter().position(|known| known == name) {
//!             Some(position) => position,
//!             None => {
//!                 names.push(name.clone());
//!                 names.len() - 1
//!             }
//!         };
//!         *node = Node::ordinal(i64::try_from(position).unwrap() + 1);
//!     }
//! });
//!
//! assert_eq!(nodes.to_string(), "select * from t where a = $1 and b = ':b' and c = $1");
//! assert_eq!(names, ["a"]);
//! ```
//!
//! ## Tokenizing without a tree
//!
//! ```rust
//! use oxide_sqlp::{TokenKind, Tokenizer};
//!
//! let count = Tokenizer::new("select $1, '$2', $3")
//!     .filter(|token| matches!(token, Ok(token) if matches!(token.kind, TokenKind::OrdinalParam(_))))
//!     .count();
//! assert_eq!(count, 2);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod walk;

pub use ast::{Fragment, Node, Nodes, Ordinal};
pub use lexer::{Span, Token, TokenKind, Tokenizer, tokenize};
pub use parser::{MAX_DEPTH, ParseError, Parser, Result, parse};
pub use walk::{
    CopyDeep, Walk, copy_deep, first_leaf, first_leaf_mut, last_leaf, last_leaf_mut,
    try_walk_deep_mut, try_walk_shallow_mut, walk_deep, walk_deep_mut, walk_shallow,
    walk_shallow_mut,
};
