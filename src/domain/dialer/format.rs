// SPDX-License-Identifier: MPL-2.0
//! Display formatting for the dial string.

/// Placeholder shown in the display area while nothing has been entered.
pub const DISPLAY_PLACEHOLDER: &str = "(123) 456-7890";

/// Formats a partial dial string for the display area.
///
/// Grouping grows with the input: the first three characters are wrapped
/// in parentheses, the next three follow after a space, and anything
/// beyond six is appended after a hyphen. An empty buffer yields
/// [`DISPLAY_PLACEHOLDER`].
#[must_use]
pub fn format_for_display(dialed: &str) -> String {
    if dialed.is_empty() {
        return DISPLAY_PLACEHOLDER.to_string();
    }

    let area: String = dialed.chars().take(3).collect();
    let prefix: String = dialed.chars().skip(3).take(3).collect();
    let line: String = dialed.chars().skip(6).collect();

    let mut formatted = format!("({area})");
    if !prefix.is_empty() {
        formatted.push(' ');
        formatted.push_str(&prefix);
    }
    if !line.is_empty() {
        formatted.push('-');
        formatted.push_str(&line);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_placeholder() {
        assert_eq!(format_for_display(""), DISPLAY_PLACEHOLDER);
    }

    #[test]
    fn partial_area_code() {
        assert_eq!(format_for_display("5"), "(5)");
        assert_eq!(format_for_display("55"), "(55)");
    }

    #[test]
    fn exactly_three_closes_parentheses_only() {
        assert_eq!(format_for_display("555"), "(555)");
    }

    #[test]
    fn fourth_character_starts_prefix_group() {
        assert_eq!(format_for_display("5551"), "(555) 1");
        assert_eq!(format_for_display("555123"), "(555) 123");
    }

    #[test]
    fn seventh_character_starts_line_group() {
        assert_eq!(format_for_display("5551234"), "(555) 123-4");
    }

    #[test]
    fn full_number() {
        assert_eq!(format_for_display("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn star_and_hash_format_like_digits() {
        assert_eq!(format_for_display("*#5"), "(*#5)");
        assert_eq!(format_for_display("555*234#67"), "(555) *23-4#67");
    }
}
