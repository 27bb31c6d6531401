//! Input masks for CPF and phone numbers.
//!
//! Masks only rearrange digits; they never validate. A mask kicks in once
//! enough digits are present for its pattern and leaves shorter input as raw
//! digits. Any digits past the pattern trail unformatted, which pushes the
//! result over the field's cap so the edit gets rejected.

use crate::field::Field;

/// Rendered width of `ddd.ddd.ddd-dd`
pub const TAX_ID_MAX_LEN: usize = 14;

/// Rendered width of `(dd) ddddd-dddd`
pub const PHONE_MAX_LEN: usize = 15;

const TAX_ID_DIGITS: usize = 11;
const LANDLINE_DIGITS: usize = 10;
const MOBILE_DIGITS: usize = 11;

/// Strip everything that is not an ASCII digit.
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Format a CPF as `ddd.ddd.ddd-dd`.
pub fn format_tax_id(value: &str) -> String {
    let digits = digits(value);
    if digits.len() < TAX_ID_DIGITS {
        return digits;
    }
    let (head, tail) = digits.split_at(TAX_ID_DIGITS);
    format!(
        "{}.{}.{}-{}{}",
        &head[0..3],
        &head[3..6],
        &head[6..9],
        &head[9..11],
        tail
    )
}

/// Format a phone number as `(dd) ddddd-dddd` when exactly 11 digits are
/// present, `(dd) dddd-dddd` otherwise.
pub fn format_phone(value: &str) -> String {
    let digits = digits(value);
    if digits.len() == MOBILE_DIGITS {
        return format!("({}) {}-{}", &digits[0..2], &digits[2..7], &digits[7..11]);
    }
    if digits.len() < LANDLINE_DIGITS {
        return digits;
    }
    let (head, tail) = digits.split_at(LANDLINE_DIGITS);
    format!("({}) {}-{}{}", &head[0..2], &head[2..6], &head[6..10], tail)
}

/// Apply the input mask for `field`.
///
/// Returns `None` when the masked value is longer than the field allows;
/// the caller should keep the previous value.
pub fn apply_mask(field: Field, value: &str) -> Option<String> {
    let (masked, cap) = match field {
        Field::TaxId => (format_tax_id(value), TAX_ID_MAX_LEN),
        Field::Phone => (format_phone(value), PHONE_MAX_LEN),
        _ => return Some(value.to_string()),
    };
    (masked.chars().count() <= cap).then_some(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_strips_punctuation() {
        assert_eq!(digits("(11) 91234-5678"), "11912345678");
        assert_eq!(digits("abc"), "");
        assert_eq!(digits("١٢٣"), "");
    }

    #[test]
    fn tax_id_partial_input_stays_raw() {
        assert_eq!(format_tax_id("123"), "123");
        assert_eq!(format_tax_id("1234567890"), "1234567890");
        assert_eq!(format_tax_id("123.456"), "123456");
    }

    #[test]
    fn tax_id_full_input_is_masked() {
        assert_eq!(format_tax_id("12345678909"), "123.456.789-09");
        assert_eq!(format_tax_id("111.444.777-35"), "111.444.777-35");
    }

    #[test]
    fn tax_id_extra_digits_trail() {
        assert_eq!(format_tax_id("123456789091"), "123.456.789-091");
    }

    #[test]
    fn phone_patterns() {
        assert_eq!(format_phone("1191234567"), "(11) 9123-4567");
        assert_eq!(format_phone("11912345678"), "(11) 91234-5678");
        assert_eq!(format_phone("119123"), "119123");
        assert_eq!(format_phone("119123456789"), "(11) 9123-456789");
    }

    #[test]
    fn mask_rejects_overlong_values() {
        assert_eq!(apply_mask(Field::TaxId, "123.456.789-091"), None);
        assert_eq!(apply_mask(Field::Phone, "(11) 91234-56789"), None);
    }

    #[test]
    fn mask_accepts_capped_values() {
        assert_eq!(
            apply_mask(Field::TaxId, "12345678909").as_deref(),
            Some("123.456.789-09")
        );
        assert_eq!(
            apply_mask(Field::Phone, "(11) 9123-45678").as_deref(),
            Some("(11) 91234-5678")
        );
    }

    #[test]
    fn unmasked_fields_pass_through() {
        assert_eq!(
            apply_mask(Field::Email, " ana@ex.com ").as_deref(),
            Some(" ana@ex.com ")
        );
        let long = "x".repeat(2_000);
        assert_eq!(apply_mask(Field::Description, &long), Some(long));
    }
}
