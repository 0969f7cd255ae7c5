//! SQL Parser
//!
//! A recursive descent parser that assembles tokenizer output into a tree of
//! nested delimiters. Everything else is kept as opaque leaves.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::{ParseError, Result};
pub use parser::{MAX_DEPTH, Parser, parse};
