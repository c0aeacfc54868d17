use thiserror::Error;

/// Why an amount typed into the form was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is not a number: {0:?}")]
    NotANumber(String),

    #[error("amount must not be negative: {0}")]
    Negative(String),

    #[error("amount is not a finite number: {0}")]
    NotFinite(String),
}

/// Parse the text of the amount field into its numeric value.
///
/// The text is taken verbatim: surrounding whitespace is an error, as are
/// NaN, infinities and negative values. "-0" parses as zero.
/// Example: "12000" -> 12000.0, "3500.75" -> 3500.75, "1e3" -> 1000.0
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let value: f64 = input
        .parse()
        .map_err(|_| ValidationError::NotANumber(input.to_string()))?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite(input.to_string()));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(input.to_string()));
    }

    // Normalise -0.0 so it can never leak into a total.
    Ok(value.abs())
}

/// Format a sum as a whole number, rounding half away from zero.
/// Example: 15500.75 -> "15501", 0.4 -> "0", 2.5 -> "3"
///
/// Infinities clamp to the largest finite value and NaN reads as "0", so the
/// result is always plain digits with an optional leading minus.
pub fn format_total(value: f64) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    let rounded = value.clamp(f64::MIN, f64::MAX).round();
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}
