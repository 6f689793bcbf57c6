//! core::validate
//!
//! Construction-time checks shared by every model builder.
//!
//! # Checks
//!
//! - [`required`] - the property must be present (`NullArgument`)
//! - [`ensure_in_range`] - inclusive numeric bounds (`OutOfRange`)
//! - [`ensure_at_least`] - lower bound only (`BelowMinimum`)
//!
//! Bound checks take an `Option` and pass when the value is absent, so an
//! optional property is only checked when the caller supplied it. Required
//! properties are unwrapped with [`required`] first and then checked.
//!
//! # Example
//!
//! ```
//! use fabric_models::core::validate::{
//!     ensure_in_range, required, ValidationError, MAX_DURATION_SECONDS,
//! };
//!
//! let count = required(Some(3), "NodeTagsDescription", "Count").unwrap();
//! assert_eq!(count, 3);
//!
//! let missing: Result<i32, _> = required(None, "NodeTagsDescription", "Count");
//! assert!(matches!(missing, Err(ValidationError::NullArgument { .. })));
//!
//! assert!(ensure_in_range(Some(MAX_DURATION_SECONDS), "T", "D", 0, MAX_DURATION_SECONDS).is_ok());
//! let past = Some(MAX_DURATION_SECONDS + 1);
//! assert!(ensure_in_range(past, "T", "D", 0, MAX_DURATION_SECONDS).is_err());
//! ```

use thiserror::Error;

/// Upper bound of duration properties carried as unsigned 32-bit seconds.
pub const MAX_DURATION_SECONDS: i64 = 4_294_967_295;

/// Errors from model construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{type_name}.{property} is required")]
    NullArgument {
        type_name: &'static str,
        property: &'static str,
    },

    #[error("{type_name}.{property} = {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        type_name: &'static str,
        property: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{type_name}.{property} = {value} is below the minimum {min}")]
    BelowMinimum {
        type_name: &'static str,
        property: &'static str,
        value: i64,
        min: i64,
    },
}

impl ValidationError {
    /// Wire name of the property that failed validation.
    pub fn property(&self) -> &'static str {
        match self {
            ValidationError::NullArgument { property, .. }
            | ValidationError::OutOfRange { property, .. }
            | ValidationError::BelowMinimum { property, .. } => property,
        }
    }

    /// Wire name of the type being constructed.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValidationError::NullArgument { type_name, .. }
            | ValidationError::OutOfRange { type_name, .. }
            | ValidationError::BelowMinimum { type_name, .. } => type_name,
        }
    }
}

/// Unwrap a required property.
///
/// # Errors
///
/// Returns `ValidationError::NullArgument` if `value` is `None`.
pub fn required<T>(
    value: Option<T>,
    type_name: &'static str,
    property: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::NullArgument {
        type_name,
        property,
    })
}

/// Check an inclusive `[min, max]` bound when the value is present.
///
/// # Errors
///
/// Returns `ValidationError::OutOfRange` if the value lies outside the bound.
pub fn ensure_in_range<T>(
    value: Option<T>,
    type_name: &'static str,
    property: &'static str,
    min: i64,
    max: i64,
) -> Result<(), ValidationError>
where
    T: Into<i64> + Copy,
{
    match value.map(Into::into) {
        Some(v) if v < min || v > max => Err(ValidationError::OutOfRange {
            type_name,
            property,
            value: v,
            min,
            max,
        }),
        _ => Ok(()),
    }
}

/// Check a lower bound when the value is present.
///
/// # Errors
///
/// Returns `ValidationError::BelowMinimum` if the value is below `min`.
pub fn ensure_at_least<T>(
    value: Option<T>,
    type_name: &'static str,
    property: &'static str,
    min: i64,
) -> Result<(), ValidationError>
where
    T: Into<i64> + Copy,
{
    match value.map(Into::into) {
        Some(v) if v < min => Err(ValidationError::BelowMinimum {
            type_name,
            property,
            value: v,
            min,
        }),
        _ => Ok(()),
    }
}

/// Check that a duration in seconds fits the unsigned 32-bit wire range.
pub fn ensure_duration_seconds(
    value: Option<i64>,
    type_name: &'static str,
    property: &'static str,
) -> Result<(), ValidationError> {
    ensure_in_range(value, type_name, property, 0, MAX_DURATION_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required_fn {
        use super::*;

        #[test]
        fn present_value_passes_through() {
            assert_eq!(required(Some("x"), "T", "P"), Ok("x"));
        }

        #[test]
        fn absent_value_is_null_argument() {
            let err = required::<i32>(None, "ServiceLoadMetricDescription", "Name").unwrap_err();
            assert_eq!(
                err,
                ValidationError::NullArgument {
                    type_name: "ServiceLoadMetricDescription",
                    property: "Name",
                }
            );
            assert_eq!(err.property(), "Name");
            assert_eq!(err.type_name(), "ServiceLoadMetricDescription");
        }

        #[test]
        fn default_value_counts_as_present() {
            assert_eq!(required(Some(0), "T", "P"), Ok(0));
            assert_eq!(required(Some(false), "T", "P"), Ok(false));
        }
    }

    mod ranges {
        use super::*;

        #[test]
        fn duration_upper_bound_is_inclusive() {
            assert!(ensure_duration_seconds(Some(MAX_DURATION_SECONDS), "T", "P").is_ok());
            assert!(ensure_duration_seconds(Some(0), "T", "P").is_ok());
        }

        #[test]
        fn duration_one_past_bound_fails() {
            let err =
                ensure_duration_seconds(Some(MAX_DURATION_SECONDS + 1), "T", "P").unwrap_err();
            assert!(matches!(
                err,
                ValidationError::OutOfRange {
                    value: 4_294_967_296,
                    min: 0,
                    max: MAX_DURATION_SECONDS,
                    ..
                }
            ));
        }

        #[test]
        fn negative_duration_fails() {
            assert!(ensure_duration_seconds(Some(-1), "T", "P").is_err());
        }

        #[test]
        fn absent_values_are_not_checked() {
            assert!(ensure_duration_seconds(None, "T", "P").is_ok());
            assert!(ensure_at_least::<i32>(None, "T", "P", 1).is_ok());
        }

        #[test]
        fn minimum_is_inclusive() {
            assert!(ensure_at_least(Some(1i32), "T", "P", 1).is_ok());
            assert_eq!(
                ensure_at_least(Some(0i32), "T", "P", 1),
                Err(ValidationError::BelowMinimum {
                    type_name: "T",
                    property: "P",
                    value: 0,
                    min: 1,
                })
            );
        }

        #[test]
        fn error_messages_name_the_property() {
            let err =
                ensure_at_least(Some(-2i32), "StatelessServiceDescription", "InstanceCount", -1)
                    .unwrap_err();
            assert_eq!(
                err.to_string(),
                "StatelessServiceDescription.InstanceCount = -2 is below the minimum -1"
            );
        }
    }
}
