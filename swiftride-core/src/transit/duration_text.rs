//! Parse human-readable trip durations such as `"1h 20m"`.

/// Minutes assumed when a duration string carries no usable figure.
pub const DEFAULT_PARSED_MINUTES: u32 = 30;

/// Parse a duration label into minutes.
///
/// The first run of digits directly followed by `h` counts as hours and the
/// first run directly followed by `m` counts as minutes. When neither token
/// is present, or both add up to zero, [`DEFAULT_PARSED_MINUTES`] is
/// returned instead of an error.
///
/// # Examples
/// ```
/// use swiftride_core::transit::parse_duration_text;
///
/// assert_eq!(parse_duration_text("1h 20m"), 80);
/// assert_eq!(parse_duration_text("45m"), 45);
/// assert_eq!(parse_duration_text("2h"), 120);
/// assert_eq!(parse_duration_text("soon"), 30);
/// ```
#[must_use]
pub fn parse_duration_text(text: &str) -> u32 {
    let hours = first_number_before(text, 'h').unwrap_or(0);
    let minutes = first_number_before(text, 'm').unwrap_or(0);
    match hours.saturating_mul(60).saturating_add(minutes) {
        0 => DEFAULT_PARSED_MINUTES,
        total => total,
    }
}

/// The first run of ASCII digits immediately followed by `unit`.
fn first_number_before(text: &str, unit: char) -> Option<u32> {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if ch == unit && !digits.is_empty() {
            return Some(digits.parse().unwrap_or(u32::MAX));
        }
        digits.clear();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1h 20m", 80)]
    #[case("0h 7m", 7)]
    #[case("3h", 180)]
    #[case("12m", 12)]
    #[case("  1h5m ", 65)]
    #[case("1 h 20 m", 30)]
    #[case("", 30)]
    #[case("0m", 30)]
    #[case("about 40 min", 30)]
    #[case("40min", 40)]
    fn parses_hour_and_minute_tokens(#[case] text: &str, #[case] expected: u32) {
        assert_eq!(parse_duration_text(text), expected);
    }

    #[rstest]
    fn uses_first_matching_token() {
        assert_eq!(parse_duration_text("10m then 20m"), 10);
    }

    #[rstest]
    fn oversized_numbers_saturate() {
        assert_eq!(parse_duration_text("99999999999h"), u32::MAX);
    }
}
