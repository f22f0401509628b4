//! Text <-> number conversion used by the edit buffer.
//!
//! Parsing follows JavaScript `parseFloat`: the longest numeric prefix is
//! accepted and anything without one becomes NaN. Formatting produces text
//! that parses back to the exact same value.

/// Parse free text the way `parseFloat` does.
///
/// Leading whitespace and an optional sign are skipped, `Infinity` is
/// recognised, and the longest decimal literal prefix is converted.
/// Everything else yields `NaN`.
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if unsigned.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let len = numeric_prefix_len(unsigned.as_bytes());
    if len == 0 {
        return f64::NAN;
    }

    match unsigned[..len].parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Length of the longest `digits [. digits] [e [+-] digits]` prefix.
///
/// Returns 0 when the prefix contains no mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }
    end
}

/// Format a value for display and for seeding the edit buffer.
///
/// Non-finite values use the JavaScript spellings (`NaN`, `Infinity`) so the
/// text survives a [`parse_float`] round trip.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("4.4"), 4.4);
        assert_eq!(parse_float("95"), 95.0);
        assert_eq!(parse_float("-0.5"), -0.5);
        assert_eq!(parse_float("+3"), 3.0);
        assert_eq!(parse_float(".25"), 0.25);
        assert_eq!(parse_float("7."), 7.0);
    }

    #[test]
    fn test_parse_accepts_numeric_prefix() {
        assert_eq!(parse_float("  12abc"), 12.0);
        assert_eq!(parse_float("3.5.6"), 3.5);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("1,5"), 1.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric_text() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("e5").is_nan());
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityxyz"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(480.0), "480");
        assert_eq!(format_number(0.87), "0.87");
    }

    proptest! {
        #[test]
        fn test_format_then_parse_is_exact(value in any::<f64>().prop_filter("not NaN", |v| !v.is_nan())) {
            let parsed = parse_float(&format_number(value));
            prop_assert_eq!(parsed.to_bits(), value.to_bits());
        }
    }
}
