//! Input validation helpers
//!
//! Payload structs derive [`validator::Validate`]; these helpers cover the
//! checks a derive cannot express.

use validator::Validate;

use crate::utils::{AppError, AppResult};

/// Run derived validation and map failures to a 400
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(AppError::from)
}

/// Reject a `start >= end` date range when both ends are present
pub fn validate_date_range(start: Option<i64>, end: Option<i64>) -> AppResult<()> {
    if let (Some(start), Some(end)) = (start, end)
        && start >= end
    {
        return Err(AppError::validation(format!(
            "start_date ({start}) must be before end_date ({end})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5))]
        name: String,
        #[validate(range(min = 0.0))]
        price: f64,
    }

    #[test]
    fn derived_rules_map_to_validation_error() {
        let ok = Sample { name: "soup".into(), price: 4.0 };
        assert!(validate_payload(&ok).is_ok());

        let bad = Sample { name: "".into(), price: -1.0 };
        let err = validate_payload(&bad).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn date_range_requires_start_before_end() {
        assert!(validate_date_range(Some(1), Some(2)).is_ok());
        assert!(validate_date_range(None, Some(2)).is_ok());
        assert!(validate_date_range(Some(2), Some(2)).is_err());
        assert!(validate_date_range(Some(3), Some(2)).is_err());
    }
}
