//! Number rendering for diagnostics.
//!
//! Grading harnesses match the checker's messages textually, so numbers are
//! printed the way C's `%G` and `%.5E` conversions print them.

const SIGNIFICANT_DIGITS: usize = 6;

/// Render like C `%G`: six significant digits, trailing zeros removed,
/// scientific notation for exponents below -4 or from 6 upwards.
pub fn format_general(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = split_exponent(&scientific);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        format!("{}E{}", trim_fraction(mantissa), c_exponent(exponent))
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Render like C `%.5E`.
pub fn format_scientific(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = split_exponent(&scientific);
    format!("{}E{}", mantissa, c_exponent(exponent))
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NAN")
    } else if value == f64::INFINITY {
        Some("INF")
    } else if value == f64::NEG_INFINITY {
        Some("-INF")
    } else {
        None
    }
}

fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn c_exponent(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{:02}", sign, exponent.abs())
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(3.14), "3.14");
        assert_eq!(format_general(5.0), "5");
        assert_eq!(format_general(-2.5), "-2.5");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_general_scientific() {
        assert_eq!(format_general(1234567.0), "1.23457E+06");
        assert_eq!(format_general(0.00001), "1E-05");
        assert_eq!(format_general(-2.5e-10), "-2.5E-10");
        assert_eq!(format_general(1e100), "1E+100");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_general(f64::NAN), "NAN");
        assert_eq!(format_general(f64::INFINITY), "INF");
        assert_eq!(format_general(f64::NEG_INFINITY), "-INF");
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_scientific(f64::INFINITY), "INF");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(0.5), "5.00000E-01");
        assert_eq!(format_scientific(1234.5), "1.23450E+03");
        assert_eq!(format_scientific(-0.000123), "-1.23000E-04");
    }
}
