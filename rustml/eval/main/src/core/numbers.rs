//! Number tokenizer: finds numeric substrings in free-form text.

use std::sync::OnceLock;

use regex::Regex;

/// Optional minus, comma-grouped digits, optional decimal part. At least one
/// digit must close the match, so a trailing `.` is never included.
const NUMBER_PATTERN: &str = r"(?im)-?[\d,]*\.?\d+";

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is a valid regex"))
}

/// Return every numeric substring of `text` in order of appearance.
///
/// Matches are returned as written (commas and minus signs intact). Text with
/// no numbers yields an empty vector.
pub fn find_numbers(text: &str) -> Vec<&str> {
    number_regex().find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(find_numbers("").is_empty());
    }

    #[test]
    fn test_no_numbers() {
        assert!(find_numbers("no digits here, only words.").is_empty());
    }

    #[test]
    fn test_order_of_appearance() {
        assert_eq!(find_numbers("21 - 15 = 6 trees"), vec!["21", "15", "6"]);
    }

    #[test]
    fn test_commas_and_decimals_kept() {
        assert_eq!(
            find_numbers("paid $5,600 and -1,234.5 later"),
            vec!["5,600", "-1,234.5"]
        );
    }

    #[test]
    fn test_trailing_period_excluded() {
        assert_eq!(find_numbers("The answer is 6."), vec!["6"]);
    }

    #[test]
    fn test_leading_decimal_point() {
        assert_eq!(find_numbers("about .5 of it"), vec![".5"]);
    }

    #[test]
    fn test_attached_minus() {
        assert_eq!(find_numbers("21-15"), vec!["21", "-15"]);
    }

    #[test]
    fn test_does_not_span_newlines() {
        assert_eq!(find_numbers("12\n34"), vec!["12", "34"]);
    }

    #[test]
    fn test_lone_punctuation_is_not_a_number() {
        assert!(find_numbers("- , . -,.").is_empty());
    }
}
