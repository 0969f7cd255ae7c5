//! Ordinal parameter numbers.

use std::fmt::{self, Write as _};

/// The number of an ordinal parameter `$N`.
///
/// Keeps the leading zeros it was written with, so `$007` serializes back
/// as `$007`. Two ordinals with the same value but different padding are
/// not equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ordinal {
    value: i64,
    padding: usize,
}

impl Ordinal {
    /// Creates an ordinal written without leading zeros.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value, padding: 0 }
    }

    /// Returns the ordinal written from `digits`, or `None` when they are not
    /// all ASCII digits or don't fit in an `i64`.
    #[must_use]
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = digits.parse().ok()?;
        let padding = digits.bytes().take(digits.len() - 1).take_while(|&b| b == b'0').count();
        Some(Self { value, padding })
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Number of leading zeros in the source spelling.
    #[must_use]
    pub const fn padding(self) -> usize {
        self.padding
    }

    /// Returns the zero-based argument index: `$1` is index 0.
    ///
    /// Returns `None` for `$0`.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.value.checked_sub(1)?).ok()
    }
}

impl From<i64> for Ordinal {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.padding {
            f.write_char('0')?;
        }
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digits_keeps_padding() {
        let ordinal = Ordinal::from_digits("007").unwrap();
        assert_eq!(ordinal.value(), 7);
        assert_eq!(ordinal.padding(), 2);
        assert_eq!(ordinal.to_string(), "007");
    }

    #[test]
    fn test_from_digits_zero() {
        assert_eq!(Ordinal::from_digits("0"), Some(Ordinal::new(0)));
        let zeros = Ordinal::from_digits("000").unwrap();
        assert_eq!(zeros.value(), 0);
        assert_eq!(zeros.to_string(), "000");
    }

    #[test]
    fn test_from_digits_rejects() {
        assert_eq!(Ordinal::from_digits(""), None);
        assert_eq!(Ordinal::from_digits("1a"), None);
        assert_eq!(Ordinal::from_digits("-1"), None);
        assert_eq!(Ordinal::from_digits("9223372036854775808"), None);
        assert_eq!(
            Ordinal::from_digits("09223372036854775807").map(Ordinal::padding),
            Some(1)
        );
    }

    #[test]
    fn test_padding_affects_equality() {
        assert_ne!(Ordinal::from_digits("01"), Some(Ordinal::new(1)));
        assert_eq!(Ordinal::from(1), Ordinal::new(1));
    }

    #[test]
    fn test_index() {
        assert_eq!(Ordinal::new(1).index(), Some(0));
        assert_eq!(Ordinal::from_digits("03").and_then(Ordinal::index), Some(2));
        assert_eq!(Ordinal::new(0).index(), None);
    }
}
