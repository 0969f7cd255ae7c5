//! Token types emitted by the tokenizer.

use super::Span;
use crate::ast::{Node, Ordinal};

/// The kind of a primitive token.
///
/// Every kind maps to exactly one spelling rule; the token's [`Span`] always
/// covers the complete spelling, including quotes, comment markers and
/// parameter prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Maximal run of space, tab, vertical tab, CR and LF.
    Whitespace,
    /// `'...'`
    QuoteSingle,
    /// `"..."`
    QuoteDouble,
    /// `` `...` ``
    QuoteGrave,
    /// `--` up to, but excluding, the line terminator.
    CommentLine,
    /// `/* ... */`
    CommentBlock,
    /// Postgres cast operator `::`.
    DoubleColon,
    /// `$` followed by decimal digits, carrying the parsed number.
    OrdinalParam(Ordinal),
    /// `:` followed by an identifier.
    NamedParam,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// Anything not recognized by the rules above.
    Text,
}

impl TokenKind {
    /// Returns true for `(`, `[` and `{`.
    #[must_use]
    pub const fn is_opening_delimiter(self) -> bool {
        matches!(self, Self::ParenOpen | Self::BracketOpen | Self::BraceOpen)
    }

    /// Returns true for `)`, `]` and `}`.
    #[must_use]
    pub const fn is_closing_delimiter(self) -> bool {
        matches!(
            self,
            Self::ParenClose | Self::BracketClose | Self::BraceClose
        )
    }

    /// Returns the closing kind matching an opening delimiter.
    #[must_use]
    pub const fn closing_delimiter(self) -> Option<Self> {
        match self {
            Self::ParenOpen => Some(Self::ParenClose),
            Self::BracketOpen => Some(Self::BracketClose),
            Self::BraceOpen => Some(Self::BraceClose),
            _ => None,
        }
    }

    /// Returns the character of a delimiter kind.
    #[must_use]
    pub const fn delimiter_char(self) -> Option<char> {
        match self {
            Self::ParenOpen => Some('('),
            Self::ParenClose => Some(')'),
            Self::BracketOpen => Some('['),
            Self::BracketClose => Some(']'),
            Self::BraceOpen => Some('{'),
            Self::BraceClose => Some('}'),
            _ => None,
        }
    }
}

/// A primitive token: a kind and the source range it covers.
///
/// Tokens do not own text. Use [`Token::text`] or [`Token::to_node`] with the
/// source the token was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source location.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the exact source text of this token.
    #[must_use]
    pub fn text(self, source: &str) -> &str {
        self.span.slice(source)
    }

    /// Converts this token into a leaf node.
    ///
    /// Returns `None` for delimiter tokens, which only exist as part of a
    /// composite node.
    #[must_use]
    pub fn to_node(self, source: &str) -> Option<Node> {
        let text = self.text(source);
        let node = match self.kind {
            TokenKind::Whitespace => Node::Whitespace(text.to_owned()),
            TokenKind::QuoteSingle => Node::QuoteSingle(strip_enclosing(text, 1, 1).to_owned()),
            TokenKind::QuoteDouble => Node::QuoteDouble(strip_enclosing(text, 1, 1).to_owned()),
            TokenKind::QuoteGrave => Node::QuoteGrave(strip_enclosing(text, 1, 1).to_owned()),
            TokenKind::CommentLine => Node::CommentLine(strip_enclosing(text, 2, 0).to_owned()),
            TokenKind::CommentBlock => Node::CommentBlock(strip_enclosing(text, 2, 2).to_owned()),
            TokenKind::DoubleColon => Node::DoubleColon,
            TokenKind::OrdinalParam(ordinal) => Node::OrdinalParam(ordinal),
            TokenKind::NamedParam => Node::NamedParam(strip_enclosing(text, 1, 0).to_owned()),
            TokenKind::Text => Node::Text(text.to_owned()),
            TokenKind::ParenOpen
            | TokenKind::ParenClose
            | TokenKind::BracketOpen
            | TokenKind::BracketClose
            | TokenKind::BraceOpen
            | TokenKind::BraceClose => return None,
        };
        Some(node)
    }
}

/// Drops an ASCII prefix and suffix of known byte length.
fn strip_enclosing(text: &str, prefix: usize, suffix: usize) -> &str {
    &text[prefix..text.len() - suffix]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_delimiter() {
        assert_eq!(
            TokenKind::ParenOpen.closing_delimiter(),
            Some(TokenKind::ParenClose)
        );
        assert_eq!(
            TokenKind::BraceOpen.closing_delimiter(),
            Some(TokenKind::BraceClose)
        );
        assert_eq!(TokenKind::ParenClose.closing_delimiter(), None);
        assert_eq!(TokenKind::Text.closing_delimiter(), None);
    }

    #[test]
    fn test_delimiter_classification() {
        assert!(TokenKind::BracketOpen.is_opening_delimiter());
        assert!(!TokenKind::BracketOpen.is_closing_delimiter());
        assert!(TokenKind::BracketClose.is_closing_delimiter());
        assert!(!TokenKind::DoubleColon.is_opening_delimiter());
        assert_eq!(TokenKind::BraceClose.delimiter_char(), Some('}'));
        assert_eq!(TokenKind::NamedParam.delimiter_char(), None);
    }

    #[test]
    fn test_to_node_strips_markers() {
        let source = "'a' \"b\" `c` --d /*e*/ :f $7 ::";
        let cases = [
            (Span::new(0, 3), TokenKind::QuoteSingle, Node::QuoteSingle("a".into())),
            (Span::new(4, 7), TokenKind::QuoteDouble, Node::QuoteDouble("b".into())),
            (Span::new(8, 11), TokenKind::QuoteGrave, Node::QuoteGrave("c".into())),
            (Span::new(12, 15), TokenKind::CommentLine, Node::CommentLine("d".into())),
            (Span::new(16, 21), TokenKind::CommentBlock, Node::CommentBlock("e".into())),
            (Span::new(22, 24), TokenKind::NamedParam, Node::NamedParam("f".into())),
            (Span::new(25, 27), TokenKind::OrdinalParam(Ordinal::new(7)), Node::ordinal(7)),
            (Span::new(28, 30), TokenKind::DoubleColon, Node::DoubleColon),
        ];
        for (span, kind, expected) in cases {
            let token = Token::new(kind, span);
            assert_eq!(token.to_node(source), Some(expected));
        }
    }

    #[test]
    fn test_to_node_delimiter_is_none() {
        let token = Token::new(TokenKind::ParenOpen, Span::new(0, 1));
        assert_eq!(token.to_node("("), None);
    }
}
