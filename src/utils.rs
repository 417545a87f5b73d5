/// Parse an age typed as free text: leading whitespace is skipped, an
/// optional sign and the leading run of digits are honored, and anything
/// unparsable counts as zero. "3.7" stops at the dot and yields 3.
pub fn parse_age(input: &str) -> i32 {
    let s = input.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => (1, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 0;
    }
    rest[..digits].parse::<i32>().map(|n| sign * n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_age;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_age("42"), 42);
        assert_eq!(parse_age("0"), 0);
    }

    #[test]
    fn decimals_truncate_at_the_dot() {
        assert_eq!(parse_age("3.7"), 3);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_age("42abc"), 42);
    }

    #[test]
    fn non_numeric_input_is_zero() {
        assert_eq!(parse_age("abc"), 0);
        assert_eq!(parse_age(""), 0);
        assert_eq!(parse_age("."), 0);
    }

    #[test]
    fn whitespace_and_signs() {
        assert_eq!(parse_age("  18 "), 18);
        assert_eq!(parse_age("-5"), -5);
        assert_eq!(parse_age("+7"), 7);
        assert_eq!(parse_age("-"), 0);
    }

    #[test]
    fn overflow_is_zero() {
        assert_eq!(parse_age("99999999999999999999"), 0);
    }
}
