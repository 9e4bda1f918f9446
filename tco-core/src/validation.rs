//! Field-level validation for numeric and text vehicle inputs

use thiserror::Error;

/// Longest display label accepted for a vehicle
pub const MAX_NAME_LENGTH: usize = 120;

/// Longest ownership horizon accepted, in years
pub const MAX_OWNERSHIP_YEARS: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("{field} too long: max {max} characters, got {actual}")]
    InputTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} contains invalid characters")]
    InvalidCharacters { field: &'static str },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be at most {max}, got {actual}")]
    TooLarge {
        field: &'static str,
        max: u32,
        actual: u32,
    },

    #[error("{field} is required {reason}")]
    Missing {
        field: &'static str,
        reason: &'static str,
    },
}

/// Validate a display label: non-empty, bounded, no control characters other
/// than tabs and line breaks
pub fn validate_name(field: &'static str, input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput { field });
    }

    let actual = input.chars().count();
    if actual > MAX_NAME_LENGTH {
        return Err(ValidationError::InputTooLong {
            field,
            max: MAX_NAME_LENGTH,
            actual,
        });
    }

    if input
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\t' | '\r'))
    {
        return Err(ValidationError::InvalidCharacters { field });
    }

    Ok(())
}

/// Require a strictly positive, finite number. Used for every denominator.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(value)
}

/// Require a finite number that is zero or greater
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Ownership horizon: at least one whole year, at most `MAX_OWNERSHIP_YEARS`
pub fn require_years(field: &'static str, years: u32) -> Result<u32, ValidationError> {
    if years == 0 {
        return Err(ValidationError::NonPositive { field, value: 0.0 });
    }
    if years > MAX_OWNERSHIP_YEARS {
        return Err(ValidationError::TooLarge {
            field,
            max: MAX_OWNERSHIP_YEARS,
            actual: years,
        });
    }
    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Civic").is_ok());
        assert_eq!(
            validate_name("name", "   "),
            Err(ValidationError::EmptyInput { field: "name" })
        );
        assert!(validate_name("name", &"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
        assert!(validate_name("name", "bad\u{0}name").is_err());
        assert!(validate_name("name", "Van\tfleet 2").is_ok());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("fuel_efficiency", 25.0), Ok(25.0));
        assert!(require_positive("fuel_efficiency", 0.0).is_err());
        assert!(require_positive("fuel_efficiency", -3.0).is_err());
        assert!(require_positive("fuel_efficiency", f64::NAN).is_err());
        assert!(require_positive("fuel_efficiency", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("insurance_cost", 0.0), Ok(0.0));
        assert!(require_non_negative("insurance_cost", -0.01).is_err());
    }

    #[test]
    fn test_require_years() {
        assert_eq!(require_years("years_of_ownership", 1), Ok(1));
        assert!(require_years("years_of_ownership", 0).is_err());
        assert_eq!(require_years("years_of_ownership", MAX_OWNERSHIP_YEARS), Ok(MAX_OWNERSHIP_YEARS));
        assert_eq!(
            require_years("years_of_ownership", 3_000_000_000),
            Err(ValidationError::TooLarge {
                field: "years_of_ownership",
                max: MAX_OWNERSHIP_YEARS,
                actual: 3_000_000_000,
            })
        );
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = require_positive("annual_mileage", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "annual_mileage must be positive, got 0");
    }
}
