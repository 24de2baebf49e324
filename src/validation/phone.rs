//! Phone number formatting applied while the user types

/// Reformat raw input into the `(123) 456-7890` shape.
///
/// Non-digits are dropped first. Ten or more digits produce the full
/// shape with any extra digits appended; six to nine digits are left as
/// bare digits; three to five digits get the area code in parentheses.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    if len >= 10 {
        format!(
            "({}) {}-{}{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..10],
            &digits[10..]
        )
    } else if len >= 6 {
        digits
    } else if len >= 3 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else {
        digits
    }
}

/// Remove the last digit and reformat; punctuation is never left dangling
pub fn pop_phone_digit(current: &str) -> String {
    let mut digits: String = current.chars().filter(char::is_ascii_digit).collect();
    digits.pop();
    format_phone(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits() {
        assert_eq!(format_phone("1234567890"), "(123) 456-7890");
    }

    #[test]
    fn test_three_digits() {
        assert_eq!(format_phone("123"), "(123) ");
    }

    #[test]
    fn test_partial_area_code() {
        assert_eq!(format_phone("12"), "12");
        assert_eq!(format_phone("12345"), "(123) 45");
    }

    #[test]
    fn test_six_to_nine_digits_stay_bare() {
        assert_eq!(format_phone("123456"), "123456");
        assert_eq!(format_phone("(123) 456-78"), "12345678");
    }

    #[test]
    fn test_extra_digits_are_appended() {
        assert_eq!(format_phone("12345678901"), "(123) 456-78901");
    }

    #[test]
    fn test_reformat_is_stable() {
        let once = format_phone("123.456.7890");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn test_pop_digit() {
        assert_eq!(pop_phone_digit("(123) "), "12");
        assert_eq!(pop_phone_digit("(123) 456-7890"), "123456789");
        assert_eq!(pop_phone_digit(""), "");
    }
}
