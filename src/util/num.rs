/// Magnitude from which numbers switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero numbers switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a number for display.
///
/// - Integral values print without a fractional part (`5`, not `5.0`).
/// - Negative zero prints as `0`.
/// - Infinities print as `Infinity` and `-Infinity`, and NaN as `NaN`.
/// - Very large and very small magnitudes use exponent notation with an
///   explicit exponent sign (`1e+21`, `1e-7`).
/// - Everything else uses the shortest representation that reads back as the
///   same `f64`.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The display form of `value`.
///
/// ## Example
/// ```
/// use cosmo::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(2.0_f64.sqrt()), "1.4142135623730951");
    }

    #[test]
    fn non_finite_values_by_name() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(0.000_001), "0.000001");
    }
}
