/// SI prefixes from 1e-24 to 1e24, in steps of 1e3.
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Format `value` with `digits` significant digits and an SI prefix
/// (`1234567.0, 2` → `1.2M`, `150000.0, 2` → `150k`).
///
/// Trailing zeros are kept, so `1e6` gives `1.0M`. Ties round away from
/// zero (`1250000.0, 2` → `1.3M`), as browsers do for `toExponential`.
pub fn format_si(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", digits - 1, value);
    }

    let lead = digits as i32 - 1;
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = round_to_digits(value, exponent - lead);
    // log10 can land one off near powers of ten, and rounding can carry
    // (999_999 → 10.0e5), so settle the exponent on the rounded mantissa.
    if mantissa.abs() >= 10f64.powi(lead + 1) {
        exponent += 1;
        mantissa = round_to_digits(value, exponent - lead);
    } else if mantissa.abs() < 10f64.powi(lead) {
        exponent -= 1;
        mantissa = round_to_digits(value, exponent - lead);
    }

    let group = exponent.div_euclid(3).clamp(-8, 8);
    // Position of the last significant digit relative to the prefix unit.
    let shift = exponent - 3 * group - lead;
    let scaled = if shift >= 0 {
        mantissa * 10f64.powi(shift)
    } else {
        mantissa / 10f64.powi(-shift)
    };
    let decimals = (-shift).max(0) as usize;

    format!("{:.*}{}", decimals, scaled, SI_PREFIXES[(group + 8) as usize])
}

/// `value / 10^shift`, rounded half away from zero to an integer.
fn round_to_digits(value: f64, shift: i32) -> f64 {
    // Divide by an exact power of ten where possible: 1e-5 is not exact.
    if shift >= 0 {
        (value / 10f64.powi(shift)).round()
    } else {
        (value * 10f64.powi(-shift)).round()
    }
}
