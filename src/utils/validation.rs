use crate::utils::error::{ExtensionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExtensionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ExtensionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Discount codes are sent verbatim to the platform, so surrounding
/// whitespace would silently produce a code that never matches.
pub fn validate_discount_code(field_name: &str, code: &str) -> Result<()> {
    validate_non_empty_string(field_name, code)?;

    if code.trim() != code {
        return Err(ExtensionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Discount code cannot have leading or trailing whitespace".to_string(),
        });
    }

    if code.chars().any(char::is_control) {
        return Err(ExtensionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.escape_debug().to_string(),
            reason: "Discount code contains control characters".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct(field_name: &str, first: &str, second: &str) -> Result<()> {
    if first == second {
        return Err(ExtensionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: second.to_string(),
            reason: "Primary and secondary discount codes must differ".to_string(),
        });
    }
    Ok(())
}
