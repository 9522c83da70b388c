use log::trace;

pub const HUNDRED: i64 = 100;

/// Every word the number parser understands, in table order.
pub const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const SCALE_WORDS: &[&str] = &["hundred", "thousand", "million", "billion"];

/// Filler dropped from every phrase before parsing.
pub const FILLER_WORD: &str = "and";

/// Value of a number word (0-19 and the decades).
pub fn word_value(word: &str) -> Option<i64> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

/// Multiplier of a scale word.
pub fn scale_value(word: &str) -> Option<i64> {
    match word {
        "hundred" => Some(HUNDRED),
        "thousand" => Some(1_000),
        "million" => Some(1_000_000),
        "billion" => Some(1_000_000_000),
        _ => None,
    }
}

/// A bare base-10 literal such as "352". Signs are not accepted.
pub fn is_numeral(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_number_token(word: &str) -> bool {
    is_numeral(word) || word_value(word).is_some() || scale_value(word).is_some()
}

/// Lowercase, turn hyphens into spaces, split, and drop "and".
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .filter(|w| *w != FILLER_WORD)
        .map(str::to_string)
        .collect()
}

/// Converts a phrase such as "three hundred fifty six" into its value.
///
/// Never fails: words that are not numbers are skipped. Values past
/// `i64::MAX` saturate; use [`try_parse_number`] to detect that.
pub fn parse_number(text: &str) -> i64 {
    try_parse_number(text).unwrap_or(i64::MAX)
}

/// Same as [`parse_number`] but returns `None` when the value overflows `i64`.
pub fn try_parse_number(text: &str) -> Option<i64> {
    let words = normalize(text);

    if let [only] = words.as_slice() {
        if is_numeral(only) {
            return only.parse().ok();
        }
    }

    let mut total: i64 = 0;
    let mut current: i64 = 0;

    for word in &words {
        if is_numeral(word) {
            current = current.checked_add(word.parse().ok()?)?;
        } else if let Some(value) = word_value(word) {
            current = current.checked_add(value)?;
        } else if let Some(scale) = scale_value(word) {
            if current == 0 {
                current = 1;
            }
            current = current.checked_mul(scale)?;
            // "hundred" nests inside the current group; bigger scales close it
            if scale > HUNDRED {
                total = total.checked_add(current)?;
                current = 0;
            }
        } else {
            trace!("ignoring non-number word '{}'", word);
        }
    }

    total.checked_add(current)
}

/// The words of `text` that `parse_number` skips.
pub fn unrecognized_words(text: &str) -> Vec<String> {
    normalize(text)
        .into_iter()
        .filter(|w| !is_number_token(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_words() {
        assert_eq!(parse_number("zero"), 0);
        assert_eq!(parse_number("nineteen"), 19);
        assert_eq!(parse_number("ninety nine"), 99);
        assert_eq!(parse_number("Seventy"), 70);
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(parse_number("one hundred"), 100);
        assert_eq!(parse_number("hundred"), 100);
        assert_eq!(parse_number("three hundred fifty six"), 356);
        assert_eq!(parse_number("one hundred and five"), 105);
    }

    #[test]
    fn test_bare_scales() {
        assert_eq!(parse_number("thousand"), 1_000);
        assert_eq!(parse_number("million"), 1_000_000);
        assert_eq!(parse_number("hundred thousand"), 100_000);
    }

    #[test]
    fn test_all_scale_tiers() {
        let phrase = "nine hundred ninety nine billion nine hundred ninety nine million \
                      nine hundred ninety nine thousand nine hundred ninety nine";
        assert_eq!(parse_number(phrase), 999_999_999_999);
        assert_eq!(
            parse_number("three hundred million two hundred thousand one"),
            300_200_001
        );
    }

    #[test]
    fn test_hyphen_and_filler() {
        assert_eq!(parse_number("twenty-five"), 25);
        assert_eq!(parse_number("twenty five and one"), 26);
        assert_eq!(parse_number("and"), 0);
    }

    #[test]
    fn test_numerals() {
        assert_eq!(parse_number("352"), 352);
        assert_eq!(parse_number("  352 "), 352);
        assert_eq!(parse_number("10 thousand"), 10_000);
        assert_eq!(parse_number("3 million 5"), 3_000_005);
    }

    #[test]
    fn test_unknown_words_are_ignored() {
        assert_eq!(parse_number("about three apples"), 3);
        assert_eq!(parse_number("banana"), 0);
        assert_eq!(parse_number(""), 0);
        assert_eq!(
            unrecognized_words("about three apples and"),
            vec!["about".to_string(), "apples".to_string()]
        );
        assert!(unrecognized_words("twenty-five thousand").is_empty());
    }

    #[test]
    fn test_overflow() {
        assert_eq!(try_parse_number("99999999999999999999"), None);
        assert_eq!(try_parse_number("9223372036854775807 billion"), None);
        assert_eq!(parse_number("9223372036854775807 billion"), i64::MAX);
        assert_eq!(try_parse_number("two thousand"), Some(2_000));
    }

    #[test]
    fn test_token_classes() {
        assert!(is_number_token("hundred"));
        assert!(is_number_token("42"));
        assert!(is_number_token("forty"));
        assert!(!is_number_token("-42"));
        assert!(!is_number_token("plus"));
        assert!(!is_numeral("+5"));
        assert!(!is_numeral(""));
    }

    #[test]
    fn test_tables_agree() {
        for word in NUMBER_WORDS {
            assert!(word_value(word).is_some(), "{} missing a value", word);
        }
        for word in SCALE_WORDS {
            assert!(scale_value(word).is_some(), "{} missing a scale", word);
        }
    }
}
