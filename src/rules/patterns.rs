// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format patterns used by the built-in field validators.
//!
//! Each pattern is compiled once, on first use.

use crate::domain::Value;
use once_cell::sync::Lazy;
use regex::Regex;

/// Five digits with an optional space after the third, e.g. `123 45`.
pub static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}\s?[0-9]{2}$").expect("postal code pattern is valid"));

/// Phone number alphabet: digits, spaces, `+`, `-` and parentheses.
pub static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-\s+()0-9]+$").expect("phone pattern is valid"));

/// Two consecutive digits somewhere in the string.
pub static PHONE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2}").expect("phone digit pattern is valid"));

/// Conservative, case-insensitive email address pattern.
///
/// The local part is dot-separated groups of the RFC 5322 atom characters
/// (ASCII only); the domain is dot-separated labels that start and end with an
/// alphanumeric character.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^",
        r"[!#$%&'*+/=?^_`{|}~\-a-z0-9]+",
        r"(?:\.[!#$%&'*+/=?^_`{|}~\-a-z0-9]+)*",
        r"@",
        r"(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+",
        r"[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    ))
    .expect("email pattern is valid")
});

/// Street address: anything that does not start with a digit.
pub static ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^[^0-9].*$").expect("address pattern is valid"));

/// Free text without digits.
pub static TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^0-9]+$").expect("text pattern is valid"));

/// Returns `true` for a phone number: only phone characters, with at least two
/// consecutive digits.
pub fn is_phone(s: &str) -> bool {
    PHONE_CHARS.is_match(s) && PHONE_DIGITS.is_match(s)
}

/// Returns `true` for a postal code whose digits form a number above 10000.
pub fn is_postal_code(s: &str) -> bool {
    if !POSTAL_CODE.is_match(s) {
        return false;
    }
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().is_ok_and(|n| n > 10000)
}

/// Returns `true` if `value` is numeric.
///
/// Numbers must be finite. Strings are trimmed of surrounding whitespace
/// (including the byte order mark) and must then be either a complete decimal
/// float literal or an unsigned `0x`, `0o` or `0b` integer, with a finite
/// value. Booleans and maps are never numeric.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_finite(),
        Value::String(s) => parse_number(s).is_some_and(f64::is_finite),
        Value::Bool(_) | Value::Map(_) => false,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if let Some(n) = parse_radix(trimmed) {
        return Some(n);
    }
    // "inf" and "nan" spellings parse but are rejected by the finiteness check
    trimmed.parse::<f64>().ok()
}

fn parse_radix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    // digits past u64 still have a (possibly infinite) float value
    s[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code() {
        assert!(is_postal_code("12345"));
        assert!(is_postal_code("123 45"));
        assert!(!is_postal_code("1234"));
        assert!(!is_postal_code("123456"));
        assert!(!is_postal_code("abcde"));
        assert!(!is_postal_code("10000"));
        assert!(is_postal_code("10001"));
        assert!(!is_postal_code("00000"));
    }

    #[test]
    fn test_phone() {
        assert!(is_phone("0701234567"));
        assert!(is_phone("0046701234567"));
        assert!(is_phone("+46701234567"));
        assert!(is_phone("(070) 123-45 67"));
        assert!(!is_phone("abc"));
        assert!(!is_phone("1"));
        assert!(!is_phone("1-2-3"));
        assert!(!is_phone(""));
    }

    #[test]
    fn test_email_accepts() {
        for email in ["foo@bar.com", "-_+@bar.com", "fOo@bar.com", "foo-@bar.com", "a.b@c-d.co.uk"] {
            assert!(EMAIL.is_match(email), "{}", email);
        }
    }

    #[test]
    fn test_email_rejects() {
        for email in [
            "åäö@bar.com",
            "foo baz@bar.com",
            "foo.@bar.com",
            "foo@bar-.com",
            "foo@bar.com-",
            "foo@bar.-com",
            ".foo@bar.com",
            "foo@bar",
            "foo..bar@baz.com",
        ] {
            assert!(!EMAIL.is_match(email), "{}", email);
        }
    }

    #[test]
    fn test_address_and_text() {
        assert!(ADDRESS.is_match("Storgatan 1"));
        assert!(!ADDRESS.is_match("1 Main Street"));
        assert!(TEXT.is_match("Ada Lovelace"));
        assert!(!TEXT.is_match("R2D2"));
        assert!(!TEXT.is_match(""));
    }

    #[test]
    fn test_numeric() {
        assert!(is_numeric(&Value::from("234")));
        assert!(is_numeric(&Value::from("23.4")));
        assert!(is_numeric(&Value::from(" 7 ")));
        assert!(is_numeric(&Value::from(0)));
        assert!(!is_numeric(&Value::from("0,ff")));
        assert!(!is_numeric(&Value::from("0..1")));
        assert!(!is_numeric(&Value::from("")));
        assert!(!is_numeric(&Value::from("NaN")));
        assert!(!is_numeric(&Value::from("inf")));
        assert!(!is_numeric(&Value::from(f64::INFINITY)));
        assert!(!is_numeric(&Value::from(true)));
        assert!(!is_numeric(&Value::map()));
    }

    #[test]
    fn test_numeric_radix_prefixes() {
        assert!(is_numeric(&Value::from("0x10")));
        assert!(is_numeric(&Value::from("0XfF")));
        assert!(is_numeric(&Value::from("0b1")));
        assert!(is_numeric(&Value::from("0o7")));
        assert!(is_numeric(&Value::from(" 0x1f\n")));
        assert!(!is_numeric(&Value::from("0x")));
        assert!(!is_numeric(&Value::from("0xg")));
        assert!(!is_numeric(&Value::from("0b2")));
        assert!(!is_numeric(&Value::from("0o8")));
        assert!(!is_numeric(&Value::from("-0x10")));
        assert!(!is_numeric(&Value::from("0x1.5")));
        assert!(!is_numeric(&Value::from(format!("0x{}", "f".repeat(300)))));
    }

    #[test]
    fn test_numeric_trims_byte_order_mark() {
        assert!(is_numeric(&Value::from("\u{FEFF}5")));
        assert!(is_numeric(&Value::from("\u{FEFF}0x10\u{00A0}")));
        assert!(!is_numeric(&Value::from("\u{FEFF}")));
    }
}
