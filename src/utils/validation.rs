use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::{DATE_FORMAT, PHONE_DIGITS};

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid phone number format. Phone number should contain exactly 10 digits.")]
    InvalidPhone { value: String },
    #[error("Invalid date format. Please use the format DD.MM.YYYY.")]
    InvalidBirthday { value: String },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidPhone { .. } => "phone",
            ValidationError::InvalidBirthday { .. } => "birthday",
        }
    }

    /// The rejected input
    pub fn value(&self) -> &str {
        match self {
            ValidationError::InvalidPhone { value } | ValidationError::InvalidBirthday { value } => {
                value
            }
        }
    }
}

/// Validate that a phone number consists of exactly ten decimal digits
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Parse a DD.MM.YYYY birthday into a calendar date
pub fn parse_birthday(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidBirthday {
        value: value.to_string(),
    })
}
