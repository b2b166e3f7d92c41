//! Canonical equation strings.
//!
//! Numbers print without decimals when integer-valued and with one decimal
//! otherwise. Shifts are written in the `(x - h)` form, so the sign of the
//! printed term is the opposite of the sign of the shift.

use crate::geometry::{ConicType, ParameterSet};

/// Formats a number: `"5"` for integer values, `"2.5"` otherwise.
///
/// Negative zero prints as `"0"`; non-finite values print as `"Infinity"`,
/// `"-Infinity"` and `"NaN"`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if value == value.floor() {
        // Adding zero turns -0.0 into 0.0.
        format!("{}", value + 0.0)
    } else {
        let rounded = (value * 10.0).round() / 10.0;
        format!("{rounded:.1}")
    }
}

/// Formats a shifted variable: `x` for zero, `x - 3` for `3`, `x + 3` for
/// `-3`.
#[must_use]
pub fn format_shift(value: f64, variable: &str) -> String {
    if value == 0.0 {
        variable.to_owned()
    } else {
        let sign = if value > 0.0 { '-' } else { '+' };
        format!("{variable} {sign} {}", format_number(value.abs()))
    }
}

/// Formats a trailing constant: empty for zero, `" + 2"` or `" - 2"`
/// otherwise.
#[must_use]
pub fn format_constant(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        let sign = if value > 0.0 { '+' } else { '-' };
        format!(" {sign} {}", format_number(value.abs()))
    }
}

/// Renders the equation of a conic of `conic_type` with `params`.
///
/// Formatting is total: parameters are not validated, so the string can be
/// shown even for a set the core would refuse to sample.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_equation(conic_type: ConicType, params: &ParameterSet) -> String {
    let ParameterSet { a, b, h, k } = *params;
    let x = format_shift(h, "x");
    let y = format_shift(k, "y");
    match conic_type {
        ConicType::Parabola => {
            let coefficient = if a == 1.0 {
                String::new()
            } else if a == -1.0 {
                "-".to_owned()
            } else {
                format_number(a)
            };
            format!("y = {coefficient}({x})²{}", format_constant(k))
        }
        ConicType::Circle => format!("({x})² + ({y})² = {}²", format_number(a)),
        ConicType::Ellipse => format!(
            "({x})²/{}² + ({y})²/{}² = 1",
            format_number(a),
            format_number(b)
        ),
        ConicType::Hyperbola => format!(
            "({x})²/{}² - ({y})²/{}² = 1",
            format_number(a),
            format_number(b)
        ),
    }
}

/// Like [`format_equation`], keyed by type name. Unknown names render as an
/// empty string.
#[must_use]
pub fn format_equation_named(conic_type: &str, params: &ParameterSet) -> String {
    match conic_type.parse::<ConicType>() {
        Ok(t) => format_equation(t, params),
        Err(err) => {
            tracing::debug!(%err, "no equation for unknown conic type");
            String::new()
        }
    }
}
