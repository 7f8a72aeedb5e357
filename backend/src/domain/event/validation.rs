//! Cross-field rules for event submissions.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::EventSubmission;
use crate::domain::Error;

/// Object name reported on every field error about an event submission.
pub const SUBMISSION_OBJECT_NAME: &str = "eventSubmission";

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A validation failure tied to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Name of the validated object.
    pub object_name: String,
    /// Offending field, in wire (camelCase) form.
    pub field: String,
    /// Machine-readable rule identifier.
    pub code: String,
    /// Value that broke the rule, `null` when absent.
    pub rejected_value: Value,
    /// Human-readable explanation.
    pub default_message: String,
}

impl FieldError {
    /// Build a field error on an event submission.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        rejected_value: Value,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            object_name: SUBMISSION_OBJECT_NAME.to_owned(),
            field: field.into(),
            code: code.into(),
            rejected_value,
            default_message: default_message.into(),
        }
    }
}

/// Check price and schedule ordering.
///
/// Returns every violation in a stable order: `basePrice`, `maxPrice`,
/// then `endEventDateTime`. An empty list means the submission is valid.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use event_api::domain::{EventSubmission, validate_submission};
///
/// let at = |day| {
///     NaiveDate::from_ymd_opt(2024, 11, day)
///         .and_then(|d| d.and_hms_opt(9, 0, 0))
///         .expect("valid timestamp")
/// };
/// let submission = EventSubmission {
///     name: "Spring".to_owned(),
///     description: "REST".to_owned(),
///     begin_enrollment_date_time: at(1),
///     close_enrollment_date_time: at(2),
///     begin_event_date_time: at(3),
///     end_event_date_time: at(4),
///     location: None,
///     base_price: 10_000,
///     max_price: 200,
///     limit_of_enrollment: 10,
/// };
/// let codes: Vec<_> = validate_submission(&submission)
///     .into_iter()
///     .map(|error| error.code)
///     .collect();
/// assert_eq!(codes, ["invalid.basePrice", "invalid.maxPrice"]);
/// ```
#[must_use]
pub fn validate_submission(submission: &EventSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if submission.max_price != 0 && submission.base_price > submission.max_price {
        let rejected = Value::from(submission.base_price);
        errors.push(FieldError::new(
            "basePrice",
            "invalid.basePrice",
            rejected.clone(),
            "base price is wrong",
        ));
        errors.push(FieldError::new(
            "maxPrice",
            "invalid.maxPrice",
            rejected,
            "max price is wrong",
        ));
    }

    let end = submission.end_event_date_time;
    if end < submission.begin_event_date_time
        || end < submission.close_enrollment_date_time
        || end < submission.begin_enrollment_date_time
    {
        errors.push(FieldError::new(
            "endEventDateTime",
            "invalid.endEventDateTime",
            Value::String(end.format(DATE_TIME_FORMAT).to_string()),
            "endEventDateTime is wrong",
        ));
    }

    errors
}

/// Wrap field errors in an `invalid_request` error.
///
/// The errors are listed, in order, under `details.errors`.
#[must_use]
pub fn validation_error(errors: Vec<FieldError>) -> Error {
    Error::invalid_request("event submission is invalid").with_details(json!({ "errors": errors }))
}
