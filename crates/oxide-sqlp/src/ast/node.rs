//! The AST node type.

use std::fmt::{self, Write as _};

use super::{Fragment, Nodes, Ordinal};

/// An AST node: a leaf holding a piece of source text, or a composite
/// holding a sequence of child nodes.
///
/// Serializing a node through [`Display`](fmt::Display) reproduces the exact
/// source text it was parsed from, including any quotes, comment markers,
/// parameter prefixes and enclosing delimiters.
///
/// Nodes are replaced in place to rewrite a query:
///
/// ```
/// use oxide_sqlp::{Node, parse, walk_deep_mut};
///
/// let mut nodes = parse("select * from t where id = :ident::uuid").unwrap();
/// walk_deep_mut(&mut nodes, |node| {
///     if let Node::NamedParam(name) = node {
///         name.push_str("_renamed");
///     }
/// });
/// assert_eq!(nodes.to_string(), "select * from t where id = :ident_renamed::uuid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Arbitrary text the tokenizer didn't recognize.
    Text(String),
    /// Run of space, tab, vertical tab, CR and LF.
    Whitespace(String),
    /// Body of a single-quoted string, without the quotes.
    QuoteSingle(String),
    /// Body of a double-quoted identifier, without the quotes.
    QuoteDouble(String),
    /// Body of a grave-quoted identifier, without the quotes.
    QuoteGrave(String),
    /// Line comment body after `--`, excluding the line terminator.
    CommentLine(String),
    /// Block comment body between `/*` and `*/`.
    CommentBlock(String),
    /// Postgres cast operator `::`.
    DoubleColon,
    /// Ordinal parameter `$N`, 1-based.
    OrdinalParam(Ordinal),
    /// Named parameter `:ident`, without the colon.
    NamedParam(String),
    /// Sequence of nodes with no enclosing delimiters.
    Nodes(Nodes),
    /// Nodes enclosed in `()`.
    Parens(Nodes),
    /// Nodes enclosed in `[]`.
    Brackets(Nodes),
    /// Nodes enclosed in `{}`.
    Braces(Nodes),
    /// Caller-defined leaf, see [`Fragment`].
    Fragment(Box<dyn Fragment>),
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a named parameter node from an identifier without the colon.
    #[must_use]
    pub fn named_param(name: impl Into<String>) -> Self {
        Self::NamedParam(name.into())
    }

    /// Creates an ordinal parameter node written without leading zeros.
    #[must_use]
    pub const fn ordinal(value: i64) -> Self {
        Self::OrdinalParam(Ordinal::new(value))
    }

    /// Wraps a caller-defined leaf.
    #[must_use]
    pub fn fragment(fragment: impl Fragment + 'static) -> Self {
        Self::Fragment(Box::new(fragment))
    }

    /// Returns true for the composite kinds: sequences, parens, brackets and
    /// braces.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Nodes(_) | Self::Parens(_) | Self::Brackets(_) | Self::Braces(_)
        )
    }

    /// Returns true for every non-composite node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !self.is_composite()
    }

    /// Returns the children of a composite node.
    #[must_use]
    pub const fn nodes(&self) -> Option<&Nodes> {
        match self {
            Self::Nodes(nodes) | Self::Parens(nodes) | Self::Brackets(nodes) | Self::Braces(nodes) => {
                Some(nodes)
            }
            _ => None,
        }
    }

    /// Returns the children of a composite node for editing.
    #[must_use]
    pub fn nodes_mut(&mut self) -> Option<&mut Nodes> {
        match self {
            Self::Nodes(nodes) | Self::Parens(nodes) | Self::Brackets(nodes) | Self::Braces(nodes) => {
                Some(nodes)
            }
            _ => None,
        }
    }

    /// Returns the opening and closing delimiters of an enclosed composite.
    #[must_use]
    pub const fn delimiters(&self) -> Option<(char, char)> {
        match self {
            Self::Parens(_) => Some(('(', ')')),
            Self::Brackets(_) => Some(('[', ']')),
            Self::Braces(_) => Some(('{', '}')),
            _ => None,
        }
    }

    /// Returns the zero-based argument index of an ordinal parameter: `$1`
    /// is index 0.
    ///
    /// Returns `None` for other nodes and for `$0`.
    #[must_use]
    pub fn ordinal_index(&self) -> Option<usize> {
        match self {
            Self::OrdinalParam(ordinal) => ordinal.index(),
            _ => None,
        }
    }

    /// Appends the SQL representation of this node to `buf`.
    ///
    /// Produces the same text as [`to_string`](ToString::to_string) without
    /// allocating a new string per node.
    pub fn write_to(&self, buf: &mut String) {
        // Writing into a `String` never fails.
        let _ = write!(buf, "{self}");
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Whitespace(text) => f.write_str(text),
            Self::QuoteSingle(body) => write!(f, "'{body}'"),
            Self::QuoteDouble(body) => write!(f, "\"{body}\""),
            Self::QuoteGrave(body) => write!(f, "`{body}`"),
            Self::CommentLine(body) => write!(f, "--{body}"),
            Self::CommentBlock(body) => write!(f, "/*{body}*/"),
            Self::DoubleColon => f.write_str("::"),
            Self::OrdinalParam(ordinal) => write!(f, "${ordinal}"),
            Self::NamedParam(name) => write!(f, ":{name}"),
            Self::Nodes(nodes) => fmt::Display::fmt(nodes, f),
            Self::Parens(nodes) => write!(f, "({nodes})"),
            Self::Brackets(nodes) => write!(f, "[{nodes}]"),
            Self::Braces(nodes) => write!(f, "{{{nodes}}}"),
            Self::Fragment(fragment) => fmt::Display::fmt(fragment, f),
        }
    }
}

impl From<Nodes> for Node {
    fn from(nodes: Nodes) -> Self {
        Self::Nodes(nodes)
    }
}
