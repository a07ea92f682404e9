// SPDX-License-Identifier: MPL-2.0
//! Dial string value object.
//!
//! This module provides the type-safe buffer behind the keypad,
//! ensuring it only ever holds a valid partial dial string.

// =============================================================================
// Dial String Bounds
// =============================================================================

/// Dial string bounds.
pub mod number_bounds {
    /// Maximum number of buffered characters.
    pub const MAX_LEN: usize = 10;
}

/// Returns whether the character belongs to the keypad alphabet
/// (ASCII digits, `*`, `#`).
#[must_use]
pub fn is_keypad_char(c: char) -> bool {
    c.is_ascii_digit() || c == '*' || c == '#'
}

// =============================================================================
// DialedNumber
// =============================================================================

/// A partial dial string, guaranteed to contain only keypad characters
/// and at most [`number_bounds::MAX_LEN`] of them.
///
/// Mutations that would break the invariant are silently ignored rather
/// than rejected with an error: once the buffer is full, further keypad
/// input simply has no effect.
///
/// # Example
///
/// ```ignore
/// let mut number = DialedNumber::new();
/// number.push('5');
/// number.push('q'); // not on the keypad, ignored
/// assert_eq!(number.as_str(), "5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialedNumber(String);

impl DialedNumber {
    /// Creates an empty dial string.
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Appends a keypad character.
    ///
    /// Ignored when the character is outside the keypad alphabet or the
    /// buffer already holds [`number_bounds::MAX_LEN`] characters.
    pub fn push(&mut self, c: char) {
        if is_keypad_char(c) && self.0.len() < number_bounds::MAX_LEN {
            self.0.push(c);
        }
    }

    /// Removes the most recently entered character. No-op when empty.
    pub fn delete_last(&mut self) {
        self.0.pop();
    }

    /// Returns the buffered characters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of buffered characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether nothing has been entered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the buffer holds a complete 10-character number.
    ///
    /// Every buffered character counts toward the length, `*` and `#`
    /// included.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.len() == number_bounds::MAX_LEN
    }

    /// Returns the dial string with the US country code prepended, as
    /// submitted to the call endpoint.
    #[must_use]
    pub fn country_prefixed(&self) -> String {
        format!("1{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn number_from(s: &str) -> DialedNumber {
        let mut number = DialedNumber::new();
        for c in s.chars() {
            number.push(c);
        }
        number
    }

    #[test]
    fn new_is_empty() {
        let number = DialedNumber::new();
        assert!(number.is_empty());
        assert_eq!(number.len(), 0);
        assert_eq!(number.as_str(), "");
    }

    #[test]
    fn push_appends_keypad_chars() {
        let number = number_from("5551234567");
        assert_eq!(number.as_str(), "5551234567");
    }

    #[test]
    fn push_accepts_star_and_hash() {
        let number = number_from("*#5");
        assert_eq!(number.as_str(), "*#5");
    }

    #[test]
    fn push_ignores_non_keypad_chars() {
        let mut number = DialedNumber::new();
        number.push('a');
        number.push('-');
        number.push(' ');
        number.push('+');
        assert!(number.is_empty());
    }

    #[test]
    fn push_ignored_at_max_length() {
        let mut number = number_from("5551234567");
        number.push('9');
        assert_eq!(number.len(), number_bounds::MAX_LEN);
        assert_eq!(number.as_str(), "5551234567");
    }

    #[test]
    fn delete_last_removes_most_recent() {
        let mut number = number_from("555");
        number.delete_last();
        assert_eq!(number.as_str(), "55");
    }

    #[test]
    fn delete_last_on_empty_is_noop() {
        let mut number = DialedNumber::new();
        number.delete_last();
        assert!(number.is_empty());
    }

    #[test]
    fn is_complete_only_at_exactly_ten() {
        assert!(!number_from("").is_complete());
        assert!(!number_from("555123456").is_complete());
        assert!(number_from("5551234567").is_complete());
    }

    #[test]
    fn star_and_hash_count_toward_length() {
        let number = number_from("55512345*#");
        assert!(number.is_complete());
    }

    #[test]
    fn country_prefixed_prepends_one() {
        let number = number_from("5551234567");
        assert_eq!(number.country_prefixed(), "15551234567");
    }

    #[test]
    fn country_prefixed_on_partial_buffer() {
        let number = number_from("555");
        assert_eq!(number.country_prefixed(), "1555");
    }

    #[test]
    fn is_keypad_char_alphabet() {
        for c in '0'..='9' {
            assert!(is_keypad_char(c));
        }
        assert!(is_keypad_char('*'));
        assert!(is_keypad_char('#'));
        assert!(!is_keypad_char('a'));
        assert!(!is_keypad_char('+'));
        assert!(!is_keypad_char('('));
    }
}
