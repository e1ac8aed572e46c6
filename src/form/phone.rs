//! Brazilian phone input mask
//!
//! Reformats a phone value from scratch on every keystroke: strip whatever
//! punctuation is present, then re-insert it from the digit count alone.
//! That makes the mask idempotent for any input.

/// Maximum number of digits a masked phone can hold (mobile numbers)
const MAX_DIGITS: usize = 11;

/// Remove every non-digit character
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the `(DD) NNNN-NNNN` / `(DD) NNNNN-NNNN` mask to an input.
///
/// `area_split` is the digit count up to which the value is rendered as
/// `(DD) rest` with no hyphen yet; landing forms use 6 or 7 depending on
/// whether a partial number is shown with the prefix grouped.
pub fn format_phone(input: &str, area_split: usize) -> String {
    // The hyphenated bands below assume the split sits between them
    let area_split = area_split.clamp(6, 7);
    let digits = strip_non_digits(input);
    let digits = &digits[..digits.len().min(MAX_DIGITS)];

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        n if n <= area_split => format!("({}) {}", &digits[..2], &digits[2..]),
        n if n <= 10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits(""), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_phone("", 7), "");
        assert_eq!(format_phone("abc", 7), "");
    }

    #[test]
    fn test_partial_area_code() {
        assert_eq!(format_phone("1", 7), "(1");
        assert_eq!(format_phone("11", 7), "(11");
    }

    #[test]
    fn test_area_split_band() {
        assert_eq!(format_phone("119", 7), "(11) 9");
        assert_eq!(format_phone("1198765", 7), "(11) 98765");
        // With the lower split the same digits already get the hyphen
        assert_eq!(format_phone("1198765", 6), "(11) 9876-5");
    }

    #[test]
    fn test_landline_ten_digits() {
        assert_eq!(format_phone("1133334444", 7), "(11) 3333-4444");
        assert_eq!(format_phone("1133334444", 6), "(11) 3333-4444");
    }

    #[test]
    fn test_mobile_eleven_digits() {
        assert_eq!(format_phone("11987654321", 7), "(11) 98765-4321");
    }

    #[test]
    fn test_excess_digits_truncated() {
        assert_eq!(format_phone("119876543210000", 7), "(11) 98765-4321");
    }

    #[test]
    fn test_mixed_punctuation_input() {
        assert_eq!(format_phone("11 9.8765-4321", 7), "(11) 98765-4321");
    }

    #[test]
    fn test_idempotent_for_all_lengths() {
        let digits = "11987654321";
        for split in [6, 7] {
            for len in 0..=digits.len() {
                let once = format_phone(&digits[..len], split);
                let twice = format_phone(&once, split);
                assert_eq!(once, twice, "len={len} split={split}");
            }
        }
    }
}
