//! Answer normalization.

use std::sync::OnceLock;

use regex::Regex;

fn decimal_digit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\p{Nd}$").expect("digit pattern is a valid regex"))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    decimal_digit_regex().is_match(c.encode_utf8(&mut buf))
}

/// Decimal value of a Unicode `Nd` character.
///
/// `Nd` characters are only assigned in contiguous ascending runs of ten
/// (zero through nine), so the value is the number of `Nd` code points
/// directly preceding `c`, modulo 10.
fn decimal_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    Some(offset % 10)
}

/// Strip thousands-separator commas from a numeric token and fold Unicode
/// decimal digits (e.g. Arabic-Indic `٦`) to ASCII.
///
/// Minus signs and decimal points are left as written.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c != ',')
        .map(|c| match decimal_value(c) {
            Some(d) if !c.is_ascii_digit() => char::from_digit(d, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_thousands_separators() {
        assert_eq!(normalize("5,600"), "5600");
        assert_eq!(normalize("1,000,000"), "1000000");
    }

    #[test]
    fn test_keeps_sign_and_decimal() {
        assert_eq!(normalize("-1,234.5"), "-1234.5");
    }

    #[test]
    fn test_plain_and_empty() {
        assert_eq!(normalize("42"), "42");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_folds_unicode_digits() {
        // Arabic-Indic, Devanagari, fullwidth, mathematical bold
        assert_eq!(normalize("\u{0666}"), "6");
        assert_eq!(normalize("\u{0661},\u{0662}\u{0663}\u{0664}.\u{0665}"), "1234.5");
        assert_eq!(normalize("-\u{096F}\u{0966}"), "-90");
        assert_eq!(normalize("\u{FF17}"), "7");
        assert_eq!(normalize("\u{1D7D5}"), "7");
    }

    #[test]
    fn test_non_digits_untouched() {
        assert_eq!(normalize("six ½ Ⅻ"), "six ½ Ⅻ");
    }

    proptest! {
        /// Removing commas is the only change to ASCII numeric tokens.
        #[test]
        fn prop_ascii_tokens_lose_only_commas(token in "-?[0-9,]{0,12}(\\.[0-9]{1,6})?") {
            let out = normalize(&token);
            prop_assert!(!out.contains(','));
            prop_assert_eq!(out, token.replace(',', ""));
        }

        /// Sign and decimal point survive normalization.
        #[test]
        fn prop_keeps_sign_and_point(int in "[0-9]{1,3}(,[0-9]{3}){0,3}", frac in "[0-9]{1,4}") {
            let token = format!("-{int}.{frac}");
            let out = normalize(&token);
            prop_assert!(out.starts_with('-'));
            prop_assert_eq!(out.matches('.').count(), 1);
            prop_assert!(out.parse::<f64>().is_ok());
        }

        #[test]
        fn prop_idempotent(s in "\\PC{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
