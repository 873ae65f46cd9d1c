use crate::types::error::AppError;

/// Fails when `value` is empty or whitespace only.
pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::require;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require("email", "").is_err());
        assert!(require("email", "   ").is_err());
        assert!(require("email", "a@x.com").is_ok());
    }
}
