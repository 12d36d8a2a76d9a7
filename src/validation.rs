//! Payload validation for create shapes.

use crate::errors::{AppError, FieldError};

/// Implemented by every create payload; checked before any service runs.
pub trait Validate {
    /// Collect every field problem instead of stopping at the first one.
    fn field_errors(&self) -> Vec<FieldError>;

    fn validate(&self) -> Result<(), AppError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("invalid request payload", errors))
        }
    }
}

pub(crate) fn non_empty(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

pub(crate) fn max_len(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
}

pub(crate) fn email(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid || value.chars().any(char::is_whitespace) {
        errors.push(FieldError::new(field, "must be a valid email"));
    }
}

pub(crate) fn positive_price(errors: &mut Vec<FieldError>, field: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(FieldError::new(field, "must be a positive amount"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        let mut errors = Vec::new();
        email(&mut errors, "email", "dealer@example.com");
        assert!(errors.is_empty());

        for bad in ["", "no-at-sign", "@example.com", "a@b", "a b@example.com", "x@example."] {
            let mut errors = Vec::new();
            email(&mut errors, "email", bad);
            assert_eq!(errors.len(), 1, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn price_must_be_finite_and_positive() {
        let mut errors = Vec::new();
        positive_price(&mut errors, "price", 0.0);
        positive_price(&mut errors, "price", f64::NAN);
        positive_price(&mut errors, "price", 19_999.0);
        assert_eq!(errors.len(), 2);
    }
}
