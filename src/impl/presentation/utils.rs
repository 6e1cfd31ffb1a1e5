use num_format::{Locale, ToFormattedString as _};

/// Format an amount of minor currency units (cents) as a decimal with exactly
/// two fraction digits and `,` thousands separators, ex. `-123456` becomes
/// `-1,234.56`.
///
/// Uses integer division only, so large amounts never pick up floating-point
/// rounding artifacts.
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        (abs / 100).to_formatted_string(&Locale::en),
        abs % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fraction() {
        assert_eq!(format_minor_units(0), "0.00");
        assert_eq!(format_minor_units(5), "0.05");
        assert_eq!(format_minor_units(500), "5.00");
        assert_eq!(format_minor_units(12345), "123.45");
        assert_eq!(format_minor_units(123456789), "1,234,567.89");
    }

    #[test]
    fn keeps_sign_below_one_unit() {
        assert_eq!(format_minor_units(-5), "-0.05");
        assert_eq!(format_minor_units(-200), "-2.00");
        assert_eq!(format_minor_units(-100001), "-1,000.01");
    }

    #[test]
    fn handles_extremes_without_overflow() {
        assert_eq!(format_minor_units(i64::MAX), "92,233,720,368,547,758.07");
        assert_eq!(format_minor_units(i64::MIN), "-92,233,720,368,547,758.08");
    }
}
