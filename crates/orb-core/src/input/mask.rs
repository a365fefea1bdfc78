//! Pure digit-buffer masking for the birth date and time fields.
//!
//! Each function maps a raw edit buffer to a formatted display string plus a
//! cursor position, independent of any text-editing widget. A digit that
//! would make the field prefix invalid rejects the whole edit; the caller
//! keeps the previous value (or clears the field) instead of accepting a
//! partially invalid state.

/// A formatted field value with the cursor pinned after the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedField {
    pub text: String,
    pub cursor: usize,
}

impl MaskedField {
    fn new(text: String) -> Self {
        let cursor = text.len();
        Self { text, cursor }
    }
}

const DATE_DIGITS: usize = 8;
const TIME_DIGITS: usize = 4;

fn collect_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Formats a raw edit buffer as a `DD.MM.YYYY` date.
///
/// Positional prefix rules: day 01-31 (never 00), month 01-12. Year digits
/// are accepted freely here; the full calendar check including month lengths
/// and leap years happens in [`crate::input::BirthDate::parse`] once all
/// eight digits are present.
///
/// Returns `None` when any digit violates its positional rule.
pub fn format_date_input(raw: &str) -> Option<MaskedField> {
    let digits = collect_digits(raw, DATE_DIGITS);
    let bytes = digits.as_bytes();
    for (i, &d) in bytes.iter().enumerate() {
        let ok = match i {
            0 => d <= b'3',
            1 => {
                let d1 = bytes[0];
                (d1 < b'3' || d <= b'1') && !(d1 == b'0' && d == b'0')
            }
            2 => d <= b'1',
            3 => {
                let m1 = bytes[2];
                (m1 == b'0' && d > b'0') || (m1 == b'1' && d <= b'2')
            }
            _ => true,
        };
        if !ok {
            return None;
        }
    }

    let mut text = String::with_capacity(DATE_DIGITS + 2);
    for (i, c) in digits.chars().enumerate() {
        text.push(c);
        if (i == 1 || i == 3) && i + 1 < digits.len() {
            text.push('.');
        }
    }
    Some(MaskedField::new(text))
}

/// Formats a raw edit buffer as an `HH:MM` time.
///
/// Positional prefix rules: hour 00-23, minute 00-59.
///
/// Returns `None` when any digit violates its positional rule.
pub fn format_time_input(raw: &str) -> Option<MaskedField> {
    let digits = collect_digits(raw, TIME_DIGITS);
    let bytes = digits.as_bytes();
    for (i, &d) in bytes.iter().enumerate() {
        let ok = match i {
            0 => d <= b'2',
            1 => {
                let h1 = bytes[0];
                h1 < b'2' || d <= b'3'
            }
            2 => d <= b'5',
            _ => true,
        };
        if !ok {
            return None;
        }
    }

    let mut text = String::with_capacity(TIME_DIGITS + 1);
    for (i, c) in digits.chars().enumerate() {
        text.push(c);
        if i == 1 && i + 1 < digits.len() {
            text.push(':');
        }
    }
    Some(MaskedField::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_separators_appear_as_digits_follow() {
        assert_eq!(format_date_input("29").unwrap().text, "29");
        assert_eq!(format_date_input("290").unwrap().text, "29.0");
        assert_eq!(format_date_input("2902").unwrap().text, "29.02");
        assert_eq!(format_date_input("29021").unwrap().text, "29.02.1");
        assert_eq!(format_date_input("29021990").unwrap().text, "29.02.1990");
    }

    #[test]
    fn day_32_is_rejected() {
        assert!(format_date_input("3202").is_none());
        assert!(format_date_input("32").is_none());
    }

    #[test]
    fn day_00_and_month_00_are_rejected() {
        assert!(format_date_input("00").is_none());
        assert!(format_date_input("1500").is_none());
    }

    #[test]
    fn month_13_is_rejected() {
        assert!(format_date_input("1513").is_none());
        assert_eq!(format_date_input("1512").unwrap().text, "15.12");
    }

    #[test]
    fn non_digits_are_stripped_before_masking() {
        assert_eq!(format_date_input("29.02.1990").unwrap().text, "29.02.1990");
        assert_eq!(format_time_input("23:59").unwrap().text, "23:59");
    }

    #[test]
    fn cursor_sits_after_last_character() {
        let field = format_date_input("2902").unwrap();
        assert_eq!(field.cursor, field.text.len());
    }

    #[test]
    fn minute_61_is_rejected() {
        assert!(format_time_input("2361").is_none());
    }

    #[test]
    fn valid_times_pass() {
        assert_eq!(format_time_input("2359").unwrap().text, "23:59");
        assert_eq!(format_time_input("0000").unwrap().text, "00:00");
        assert_eq!(format_time_input("1930").unwrap().text, "19:30");
    }

    #[test]
    fn hour_24_is_rejected() {
        assert!(format_time_input("24").is_none());
        assert!(format_time_input("30").is_none());
    }
}
