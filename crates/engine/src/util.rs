//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every record type enforces the same invariants.

use crate::{EngineError, ResultEngine};

/// Reject NaN, infinities and negative values.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> ResultEngine<()> {
    if !value.is_finite() {
        return Err(EngineError::validation(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(EngineError::validation(field, "must be >= 0"));
    }
    Ok(())
}

/// Like [`ensure_non_negative`] but zero is rejected too.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> ResultEngine<()> {
    ensure_non_negative(field, value)?;
    if value == 0.0 {
        return Err(EngineError::validation(field, "must be > 0"));
    }
    Ok(())
}

/// Percentages live in `[0, 100]`.
pub(crate) fn ensure_percent(field: &'static str, value: f64) -> ResultEngine<()> {
    ensure_non_negative(field, value)?;
    if value > 100.0 {
        return Err(EngineError::validation(field, "must be <= 100"));
    }
    Ok(())
}

pub(crate) fn normalize_required_text(field: &'static str, value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Non-finite amounts count as zero when folding.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds_are_inclusive() {
        assert!(ensure_percent("p", 0.0).is_ok());
        assert!(ensure_percent("p", 100.0).is_ok());
        assert!(ensure_percent("p", 100.01).is_err());
        assert!(ensure_percent("p", -0.01).is_err());
        assert!(ensure_percent("p", f64::NAN).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert_eq!(
            ensure_positive("gravel_cft", 0.0),
            Err(EngineError::validation("gravel_cft", "must be > 0"))
        );
        assert!(ensure_positive("gravel_cft", 0.5).is_ok());
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(normalize_optional_text(Some("  ")), None);
        assert_eq!(normalize_optional_text(Some(" diesel ")), Some("diesel".to_string()));
        assert!(normalize_required_text("name", " ").is_err());
    }
}
