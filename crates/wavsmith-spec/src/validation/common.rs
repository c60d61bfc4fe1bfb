//! Reusable numeric validators for render parameters.

use std::fmt;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

fn require_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Validate that a value is positive (> 0).
///
/// # Example
/// ```
/// use wavsmith_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("frequency_hz", 440.0).is_ok());
/// assert!(validate_positive("frequency_hz", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is within a specified range [min, max].
///
/// # Example
/// ```
/// use wavsmith_spec::validation::common::validate_range;
///
/// assert!(validate_range("pan", -50.0, -100.0, 100.0).is_ok());
/// assert!(validate_range("pan", 101.0, -100.0, 100.0).is_err());
/// ```
pub fn validate_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    require_finite(name, value)?;
    if value < min || value > max {
        return Err(CommonValidationError::new(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}
