//! Incremental SQL tokenizer.

use std::iter::FusedIterator;

use tracing::trace;

use super::{Span, Token, TokenKind};
use crate::ast::Ordinal;
use crate::parser::{ParseError, Result};

const ORDINAL_PREFIX: u8 = b'$';
const NAMED_PREFIX: u8 = b':';
const CAST: &str = "::";
const COMMENT_LINE_PREFIX: &str = "--";
const COMMENT_BLOCK_PREFIX: &str = "/*";
const COMMENT_BLOCK_SUFFIX: &str = "*/";

/// Quote bytes in dispatch order.
const QUOTES: [(u8, TokenKind); 3] = [
    (b'\'', TokenKind::QuoteSingle),
    (b'"', TokenKind::QuoteDouble),
    (b'`', TokenKind::QuoteGrave),
];

/// Delimiter bytes in dispatch order.
const DELIMITERS: [(u8, TokenKind); 6] = [
    (b'(', TokenKind::ParenOpen),
    (b')', TokenKind::ParenClose),
    (b'[', TokenKind::BracketOpen),
    (b']', TokenKind::BracketClose),
    (b'{', TokenKind::BraceOpen),
    (b'}', TokenKind::BraceClose),
];

const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0B' | b'\r' | b'\n')
}

const fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

const fn is_ident(byte: u8) -> bool {
    is_ident_start(byte) || byte.is_ascii_digit()
}

/// Splits SQL source into primitive tokens.
///
/// The tokenizer never skips or duplicates input: concatenating the text of
/// every token it yields reproduces the source. Anything not recognized is
/// accumulated into [`TokenKind::Text`] runs, one character at a time, until
/// a recognized token starts.
///
/// ```
/// use oxide_sqlp::{Ordinal, TokenKind, Tokenizer};
///
/// let kinds: Vec<TokenKind> = Tokenizer::new("id = $1")
///     .map(|token| token.map(|token| token.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Text,
///         TokenKind::Whitespace,
///         TokenKind::Text,
///         TokenKind::Whitespace,
///         TokenKind::OrdinalParam(Ordinal::new(1)),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    /// The input source code.
    source: &'a str,
    /// The current byte position.
    pos: usize,
    /// A structured token found right after a text run. The text run is
    /// returned first, this token on the following call. Never holds more
    /// than one token.
    pending: Option<Token>,
    /// Set once a fatal error has been returned.
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            pending: None,
            failed: false,
        }
    }

    /// Returns the source being tokenized.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the current byte position.
    ///
    /// When a token is buffered, this is the end of the buffered token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Tokenizes the rest of the input and returns all tokens.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error: an unterminated quote or block
    /// comment, or an out-of-range ordinal parameter.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn is_next(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advances past one character.
    fn advance_char(&mut self) {
        let width = self.rest().chars().next().map_or(1, char::len_utf8);
        self.pos += width;
    }

    /// Tries every structured rule at the current position, in dispatch
    /// order. Advances and returns the kind on success; leaves the position
    /// untouched when nothing matches.
    fn scan_structured(&mut self) -> Result<Option<TokenKind>> {
        let Some(byte) = self.peek_byte() else {
            return Ok(None);
        };

        if is_whitespace(byte) {
            self.scan_whitespace();
            return Ok(Some(TokenKind::Whitespace));
        }
        if let Some(&(quote, kind)) = QUOTES.iter().find(|(quote, _)| *quote == byte) {
            self.scan_quoted(quote)?;
            return Ok(Some(kind));
        }
        if self.is_next(COMMENT_LINE_PREFIX) {
            self.scan_comment_line();
            return Ok(Some(TokenKind::CommentLine));
        }
        if self.is_next(COMMENT_BLOCK_PREFIX) {
            self.scan_comment_block()?;
            return Ok(Some(TokenKind::CommentBlock));
        }
        if self.is_next(CAST) {
            self.pos += CAST.len();
            return Ok(Some(TokenKind::DoubleColon));
        }
        if byte == ORDINAL_PREFIX {
            if let Some(ordinal) = self.scan_ordinal()? {
                return Ok(Some(TokenKind::OrdinalParam(ordinal)));
            }
        }
        if byte == NAMED_PREFIX && self.scan_named() {
            return Ok(Some(TokenKind::NamedParam));
        }
        if let Some(&(_, kind)) = DELIMITERS.iter().find(|(delim, _)| *delim == byte) {
            self.pos += 1;
            return Ok(Some(kind));
        }
        Ok(None)
    }

    fn scan_whitespace(&mut self) {
        while self.peek_byte().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Scans `quote ... quote` with no escape processing.
    fn scan_quoted(&mut self, quote: u8) -> Result<()> {
        let start = self.pos;
        let body = &self.source.as_bytes()[start + 1..];
        match body.iter().position(|&b| b == quote) {
            Some(offset) => {
                self.pos = start + 1 + offset + 1;
                Ok(())
            }
            None => Err(ParseError::UnterminatedQuote {
                quote: char::from(quote),
                span: Span::new(start, self.source.len()),
            }),
        }
    }

    /// Scans `--` up to, but excluding, CR or LF.
    fn scan_comment_line(&mut self) {
        self.pos += COMMENT_LINE_PREFIX.len();
        let rest = self.rest();
        let body = rest.find(|c: char| c == '\r' || c == '\n').unwrap_or(rest.len());
        self.pos += body;
    }

    fn scan_comment_block(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += COMMENT_BLOCK_PREFIX.len();
        match self.rest().find(COMMENT_BLOCK_SUFFIX) {
            Some(offset) => {
                self.pos += offset + COMMENT_BLOCK_SUFFIX.len();
                Ok(())
            }
            None => {
                self.pos = start;
                Err(ParseError::UnterminatedComment {
                    span: Span::new(start, self.source.len()),
                })
            }
        }
    }

    /// Scans `$` followed by at least one decimal digit.
    fn scan_ordinal(&mut self) -> Result<Option<Ordinal>> {
        let start = self.pos;
        let digits = self.source.as_bytes()[start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Ok(None);
        }

        let end = start + 1 + digits;
        let ordinal = Ordinal::from_digits(&self.source[start + 1..end]).ok_or(
            ParseError::InvalidOrdinal {
                span: Span::new(start, end),
            },
        )?;
        self.pos = end;
        Ok(Some(ordinal))
    }

    /// Scans `:` followed by an identifier.
    fn scan_named(&mut self) -> bool {
        let ident = &self.source.as_bytes()[self.pos + 1..];
        if !ident.first().copied().is_some_and(is_ident_start) {
            return false;
        }
        let len = ident.iter().take_while(|&&b| is_ident(b)).count();
        self.pos += 1 + len;
        true
    }

    /// Returns the text accumulated in `start..mid`, if any, and buffers the
    /// structured token in `mid..pos`; otherwise returns the structured
    /// token directly.
    fn choose(&mut self, start: usize, mid: usize, kind: TokenKind) -> Token {
        let next = Token::new(kind, Span::new(mid, self.pos));
        debug_assert!(!next.span.is_empty(), "structured token must not be empty");

        if mid > start {
            debug_assert!(self.pending.is_none(), "lookahead already occupied");
            trace!(?next, "buffering token after text run");
            self.pending = Some(next);
            return Token::new(TokenKind::Text, Span::new(start, mid));
        }
        next
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.failed {
            return None;
        }

        let start = self.pos;
        while self.pos < self.source.len() {
            let mid = self.pos;
            match self.scan_structured() {
                Ok(Some(kind)) => return Some(Ok(self.choose(start, mid, kind))),
                Ok(None) => self.advance_char(),
                Err(_) if mid > start => {
                    // Hand out the text first; the error is hit again on the
                    // next call.
                    self.pos = mid;
                    return Some(Ok(Token::new(TokenKind::Text, Span::new(start, mid))));
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }

        (self.pos > start).then(|| Ok(Token::new(TokenKind::Text, Span::new(start, self.pos))))
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenizes the whole input.
///
/// # Errors
///
/// See [`Tokenizer::tokenize`].
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Tokenizer::new(source).tokenize()
}
