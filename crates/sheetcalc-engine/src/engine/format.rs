use crate::error::ERROR_SENTINEL;

/// Format a number for display.
///
/// Whole numbers print without a fractional part, very large or very small
/// magnitudes switch to exponent notation, and everything else uses the
/// shortest representation that round-trips. Non-finite numbers show as
/// [`ERROR_SENTINEL`].
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        ERROR_SENTINEL.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        format!("{:e}", n)
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_format_whole_and_fractional() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_negative_zero_and_extremes() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(1e-7), "1e-7");
    }

    #[test]
    fn test_non_finite_shows_error_sentinel() {
        assert_eq!(format_number(f64::INFINITY), "#ERROR");
        assert_eq!(format_number(f64::NEG_INFINITY), "#ERROR");
        assert_eq!(format_number(f64::NAN), "#ERROR");
    }
}
