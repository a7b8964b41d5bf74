use std::fmt;

/// Result type for stockkeep-types operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Rejected form input. Nothing is written to the store when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field (name or quantity) was blank
    MissingField(&'static str),

    /// The field did not parse as an integer
    NotANumber { field: &'static str, value: String },

    /// The field parsed but was below zero
    Negative { field: &'static str, value: i64 },

    /// The field does not fit the stored integer range
    OutOfRange { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::NotANumber { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(_) => write!(f, "Name and quantity are required"),
            ValidationError::NotANumber { field, value } => {
                write!(f, "Invalid {}: '{}' is not a whole number", field, value)
            }
            ValidationError::Negative { field, value } => {
                write!(f, "Invalid {}: {} must not be negative", field, value)
            }
            ValidationError::OutOfRange { field, value } => {
                write!(f, "Invalid {}: {} is too large", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ValidationError::MissingField("name");
        assert_eq!(err.to_string(), "Name and quantity are required");
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_not_a_number_message() {
        let err = ValidationError::NotANumber {
            field: "quantity",
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity: 'abc' is not a whole number"
        );
    }
}
