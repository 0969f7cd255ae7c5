//! SQL Parser implementation.

use tracing::debug;

use super::error::{ParseError, Result};
use crate::ast::{Node, Nodes};
use crate::lexer::{Token, TokenKind, Tokenizer};

/// Parses SQL text into a lossless tree.
///
/// ```
/// use oxide_sqlp::{Node, parse};
///
/// let mut nodes = parse("select * from [bracketed] where col1 = 123").unwrap();
/// for node in nodes.iter_mut() {
///     if matches!(node, Node::Brackets(_)) {
///         *node = Node::text("(select * from some_table where col2 = '456') as _");
///     }
/// }
/// assert_eq!(
///     nodes.to_string(),
///     "select * from (select * from some_table where col2 = '456') as _ where col1 = 123"
/// );
/// ```
///
/// # Errors
///
/// Returns the first lexical or structural error; no partial tree is
/// returned.
pub fn parse(source: &str) -> Result<Nodes> {
    Parser::new(source).parse()
}

/// The three kinds of enclosing delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    const fn opened_by(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::ParenOpen => Some(Self::Paren),
            TokenKind::BracketOpen => Some(Self::Bracket),
            TokenKind::BraceOpen => Some(Self::Brace),
            _ => None,
        }
    }

    const fn close_kind(self) -> TokenKind {
        match self {
            Self::Paren => TokenKind::ParenClose,
            Self::Bracket => TokenKind::BracketClose,
            Self::Brace => TokenKind::BraceClose,
        }
    }

    const fn close_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
            Self::Brace => '}',
        }
    }

    fn wrap(self, nodes: Nodes) -> Node {
        match self {
            Self::Paren => Node::Parens(nodes),
            Self::Bracket => Node::Brackets(nodes),
            Self::Brace => Node::Braces(nodes),
        }
    }
}

/// Deepest delimiter nesting the parser accepts.
///
/// Trees are serialized, compared, copied, walked and dropped recursively,
/// one stack frame per nesting level. Input that nests deeper is rejected
/// with [`ParseError::NestingTooDeep`].
pub const MAX_DEPTH: usize = 512;

/// An open composite waiting for its closing delimiter.
#[derive(Debug, Clone, Copy)]
struct Frame {
    delimiter: Delimiter,
    opened_at: usize,
}

/// SQL Parser.
///
/// Builds a tree on top of [`Tokenizer`]: every opening delimiter starts a
/// nested sequence that ends at the matching closing delimiter. Nesting is
/// strict per delimiter kind, so `(]` is an error.
///
/// Open composites are kept on an explicit stack, so the parser itself uses
/// constant native stack space whatever the input.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
        }
    }

    /// Parses the whole input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for an unterminated quote or block comment, an
    /// out-of-range ordinal parameter, a closing delimiter that doesn't
    /// match the innermost open one, an open delimiter at end of input, or
    /// nesting deeper than [`MAX_DEPTH`].
    pub fn parse(&mut self) -> Result<Nodes> {
        let source = self.tokenizer.source();
        match self.parse_nodes() {
            Ok(nodes) => {
                debug!(len = source.len(), nodes = nodes.len(), "parsed sql");
                Ok(nodes)
            }
            Err(err) => {
                debug!(len = source.len(), %err, "failed to parse sql");
                Err(err)
            }
        }
    }

    /// Parses until end of input. Each open composite keeps its frame and
    /// the siblings collected before it on `open`; `nodes` holds the
    /// children of the innermost one.
    fn parse_nodes(&mut self) -> Result<Nodes> {
        let source = self.tokenizer.source();
        let mut open: Vec<(Frame, Nodes)> = Vec::new();
        let mut nodes = Nodes::new();

        while let Some(token) = self.tokenizer.next() {
            let token = token?;

            if let Some(node) = token.to_node(source) {
                nodes.push(node);
                continue;
            }
            if let Some(delimiter) = Delimiter::opened_by(token.kind) {
                if open.len() == MAX_DEPTH {
                    return Err(ParseError::NestingTooDeep {
                        limit: MAX_DEPTH,
                        position: token.span.start,
                    });
                }
                let frame = Frame {
                    delimiter,
                    opened_at: token.span.start,
                };
                open.push((frame, std::mem::take(&mut nodes)));
                continue;
            }
            match open.pop() {
                Some((frame, parent)) if token.kind == frame.delimiter.close_kind() => {
                    let inner = std::mem::replace(&mut nodes, parent);
                    nodes.push(frame.delimiter.wrap(inner));
                }
                innermost => {
                    return Err(unexpected_closing(token, innermost.map(|(frame, _)| frame)));
                }
            }
        }

        match open.last() {
            None => Ok(nodes),
            Some((frame, _)) => Err(ParseError::MissingClosingDelimiter {
                expected: frame.delimiter.close_char(),
                opened_at: frame.opened_at,
                position: source.len(),
            }),
        }
    }
}

fn unexpected_closing(token: Token, frame: Option<Frame>) -> ParseError {
    ParseError::UnexpectedClosingDelimiter {
        found: token.kind.delimiter_char().unwrap_or_default(),
        expected: frame.map(|frame| frame.delimiter.close_char()),
        position: token.span.start,
    }
}
