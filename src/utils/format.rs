/// Significant digits of the console number format.
const PRECISION: i32 = 6;

/// Formats a number the way a C stream prints doubles by default
/// (`%g` with six significant digits and trailing zeros removed).
pub fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // The exponent must be taken after rounding to the target precision.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "0");
        assert_eq!(format_general(0.1), "0.1");
        assert_eq!(format_general(0.1 + 0.2), "0.3");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(-2.5), "-2.5");
        assert_eq!(format_general(123456.0), "123456");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_general(9.987502603949663), "9.9875");
        assert_eq!(format_general(0.49979169270678331), "0.499792");
        assert_eq!(format_general(1.0 + 0.9987502603949663), "1.99875");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(999999.7), "1e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(0.0001), "0.0001");
    }
}
