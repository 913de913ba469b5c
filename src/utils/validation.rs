use crate::utils::error::{QaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(QaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List must contain at least one entry".to_string(),
        });
    }

    for value in values {
        validate_non_empty_string(field_name, value)?;
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QaError::InvalidConfigValueError {
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
        return Err(QaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("vocabulary.damping", &["damp".to_string()]).is_ok());
        assert!(validate_non_empty_list("vocabulary.damping", &[]).is_err());
        assert!(validate_non_empty_list("vocabulary.damping", &["  ".to_string()]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("chart.width", 40, 10, 120).is_ok());
        assert!(validate_range("chart.width", 5, 10, 120).is_err());
        assert!(validate_range("chart.width", 121, 10, 120).is_err());
    }
}
