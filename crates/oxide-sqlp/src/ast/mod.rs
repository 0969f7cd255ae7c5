//! Abstract Syntax Tree (AST) types.
//!
//! The tree is lossless: leaves keep the exact text they were parsed from,
//! composites keep their delimiters, and serializing any tree produced by
//! the parser reproduces the original source byte-for-byte.

mod fragment;
mod node;
mod nodes;
mod ordinal;

pub use fragment::Fragment;
pub use node::Node;
pub use nodes::Nodes;
pub use ordinal::Ordinal;
