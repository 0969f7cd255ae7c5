//! Parser error types.

use thiserror::Error;

use crate::lexer::Span;

/// A lexical or structural error. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted span reached end of input before its closing quote.
    #[error("unterminated quote: expected closing {quote:?} for quote opened at byte {}, got end of input", .span.start)]
    UnterminatedQuote {
        /// The quote character: `'`, `"` or `` ` ``.
        quote: char,
        /// From the opening quote to end of input.
        span: Span,
    },

    /// A block comment reached end of input before `*/`.
    #[error("unterminated comment: expected closing \"*/\" for comment opened at byte {}, got end of input", .span.start)]
    UnterminatedComment {
        /// From the opening `/*` to end of input.
        span: Span,
    },

    /// A closing delimiter that doesn't match the innermost open one.
    #[error("unexpected closing {found:?} at byte {position}{}", expected_suffix(.expected))]
    UnexpectedClosingDelimiter {
        /// The closing delimiter found.
        found: char,
        /// The closing delimiter awaited, if any composite was open.
        expected: Option<char>,
        /// Byte offset of `found`.
        position: usize,
    },

    /// End of input while a composite was still open.
    #[error("missing closing delimiter {expected:?} for delimiter opened at byte {opened_at}")]
    MissingClosingDelimiter {
        /// The closing delimiter awaited.
        expected: char,
        /// Byte offset of the opening delimiter.
        opened_at: usize,
        /// Byte offset where end of input was reached.
        position: usize,
    },

    /// An opening delimiter past the nesting limit.
    #[error("nesting too deep: more than {limit} open delimiters at byte {position}")]
    NestingTooDeep {
        /// The nesting limit, [`MAX_DEPTH`](crate::parser::MAX_DEPTH).
        limit: usize,
        /// Byte offset of the opening delimiter that exceeded the limit.
        position: usize,
    },

    /// An ordinal parameter whose digits don't fit in a 64-bit signed integer.
    #[error("invalid ordinal parameter at byte {}: number out of range", .span.start)]
    InvalidOrdinal {
        /// The whole `$digits` token.
        span: Span,
    },
}

#[allow(clippy::ref_option)]
fn expected_suffix(expected: &Option<char>) -> String {
    expected.map_or_else(String::new, |c| format!(", expected {c:?}"))
}

impl ParseError {
    /// Returns the byte offset at which the fault was detected.
    ///
    /// For unterminated quotes and comments this is the end of input; the
    /// opening position is available through the error's span.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnterminatedQuote { span, .. } | Self::UnterminatedComment { span } => span.end,
            Self::UnexpectedClosingDelimiter { position, .. }
            | Self::MissingClosingDelimiter { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
            Self::InvalidOrdinal { span } => span.start,
        }
    }
}

/// Result type alias for tokenizing and parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
