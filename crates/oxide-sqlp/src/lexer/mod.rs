//! SQL tokenizer.
//!
//! This module provides a hand-written, lossless tokenizer that produces a
//! stream of primitive tokens. It can be used on its own for algorithms that
//! only need to scan, such as counting parameters, without building a tree.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
