/// Renders `n` with a `,` between groups of three digits: 1000000 -> "1,000,000".
pub fn format_number(n: i64) -> String {
    format_number_with(n, ',')
}

/// Same as [`format_number`] with a caller-chosen separator.
pub fn format_number_with(n: i64, separator: char) -> String {
    // unsigned_abs keeps i64::MIN representable
    let digits: Vec<char> = n.unsigned_abs().to_string().chars().collect();

    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (count, digit) in digits.iter().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.reverse();

    grouped.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_are_untouched() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1), "1");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(299_800_000), "299,800,000");
        assert_eq!(format_number(999_999_999_999), "999,999,999,999");
        assert_eq!(format_number(12_345), "12,345");
    }

    #[test]
    fn test_negative_keeps_leading_sign() {
        assert_eq!(format_number(-5), "-5");
        assert_eq!(format_number(-1_234_567), "-1,234,567");
        assert_eq!(format_number(-100_000), "-100,000");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_number_with(6_000_000, '.'), "6.000.000");
        assert_eq!(format_number_with(1234, ' '), "1 234");
        assert_eq!(format_number_with(-1234, '\''), "-1'234");
    }
}
