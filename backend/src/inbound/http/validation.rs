//! Presence checks and query parsing for the event endpoints.
//!
//! These checks run before the domain rules and report every violation at
//! once. A request failing here never reaches the domain.

use pagination::{DEFAULT_PAGE_SIZE, PageRequest, SortOrder};
use serde_json::Value;

use crate::domain::{Error, EventPatch, EventSubmission, FieldError, validation_error};
use crate::inbound::http::events_dto::{EventRequestBody, EventUpdateBody};

/// Presence rule identifiers reported in `FieldError::code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    NotEmpty,
    NotNull,
    Min,
}

impl Rule {
    const fn code(self) -> &'static str {
        match self {
            Self::NotEmpty => "NotEmpty",
            Self::NotNull => "NotNull",
            Self::Min => "Min",
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::NotEmpty => "must not be empty",
            Self::NotNull => "must not be null",
            Self::Min => "must be greater than or equal to 0",
        }
    }
}

/// Newtype wrapper for wire field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldName(&'static str);

/// Accumulates violations across every field of a body.
#[derive(Default)]
struct Violations(Vec<FieldError>);

impl Violations {
    fn push(&mut self, field: FieldName, rule: Rule, rejected: Value) {
        self.0
            .push(FieldError::new(field.0, rule.code(), rejected, rule.message()));
    }

    fn text(&mut self, field: FieldName, value: Option<String>) -> Option<String> {
        match value {
            Some(text) if !text.trim().is_empty() => Some(text),
            other => {
                self.push(field, Rule::NotEmpty, other.map_or(Value::Null, Value::String));
                None
            }
        }
    }

    fn optional_text(&mut self, field: FieldName, value: Option<String>) -> Option<String> {
        value.and_then(|text| self.text(field, Some(text)))
    }

    fn required<T>(&mut self, field: FieldName, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, Rule::NotNull, Value::Null);
        }
        value
    }

    fn non_negative(&mut self, field: FieldName, value: i32) -> i32 {
        if value < 0 {
            self.push(field, Rule::Min, Value::from(value));
        }
        value
    }

    fn optional_non_negative(&mut self, field: FieldName, value: Option<i32>) -> Option<i32> {
        value.map(|number| self.non_negative(field, number))
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, Error> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(validation_error(self.0)),
        }
    }
}

const NAME: FieldName = FieldName("name");
const DESCRIPTION: FieldName = FieldName("description");
const BEGIN_ENROLLMENT: FieldName = FieldName("beginEnrollmentDateTime");
const CLOSE_ENROLLMENT: FieldName = FieldName("closeEnrollmentDateTime");
const BEGIN_EVENT: FieldName = FieldName("beginEventDateTime");
const END_EVENT: FieldName = FieldName("endEventDateTime");
const BASE_PRICE: FieldName = FieldName("basePrice");
const MAX_PRICE: FieldName = FieldName("maxPrice");
const LIMIT_OF_ENROLLMENT: FieldName = FieldName("limitOfEnrollment");

/// Check a create body and turn it into a submission.
///
/// # Errors
/// Returns an `invalid_request` error whose `details.errors` lists every
/// missing or out-of-range field.
pub(crate) fn check_create(body: EventRequestBody) -> Result<EventSubmission, Error> {
    let mut violations = Violations::default();
    let name = violations.text(NAME, body.name);
    let description = violations.text(DESCRIPTION, body.description);
    let begin_enrollment = violations.required(BEGIN_ENROLLMENT, body.begin_enrollment_date_time);
    let close_enrollment = violations.required(CLOSE_ENROLLMENT, body.close_enrollment_date_time);
    let begin_event = violations.required(BEGIN_EVENT, body.begin_event_date_time);
    let end_event = violations.required(END_EVENT, body.end_event_date_time);
    let base_price = violations.non_negative(BASE_PRICE, body.base_price);
    let max_price = violations.non_negative(MAX_PRICE, body.max_price);
    let limit_of_enrollment = violations.non_negative(LIMIT_OF_ENROLLMENT, body.limit_of_enrollment);

    let submission = (|| {
        Some(EventSubmission {
            name: name?,
            description: description?,
            begin_enrollment_date_time: begin_enrollment?,
            close_enrollment_date_time: close_enrollment?,
            begin_event_date_time: begin_event?,
            end_event_date_time: end_event?,
            location: body.location,
            base_price,
            max_price,
            limit_of_enrollment,
        })
    })();
    violations.finish(submission)
}

/// Check an update body and turn it into a patch.
///
/// # Errors
/// Returns an `invalid_request` error listing every provided field that is
/// blank or negative.
pub(crate) fn check_update(body: EventUpdateBody) -> Result<EventPatch, Error> {
    let mut violations = Violations::default();
    let patch = EventPatch {
        name: violations.optional_text(NAME, body.name),
        description: violations.optional_text(DESCRIPTION, body.description),
        begin_enrollment_date_time: body.begin_enrollment_date_time,
        close_enrollment_date_time: body.close_enrollment_date_time,
        begin_event_date_time: body.begin_event_date_time,
        end_event_date_time: body.end_event_date_time,
        location: body.location,
        base_price: violations.optional_non_negative(BASE_PRICE, body.base_price),
        max_price: violations.optional_non_negative(MAX_PRICE, body.max_price),
        limit_of_enrollment: violations
            .optional_non_negative(LIMIT_OF_ENROLLMENT, body.limit_of_enrollment),
    };
    violations.finish(Some(patch))
}

fn invalid_parameter(name: &str, value: &str, reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("invalid {name} parameter '{value}': {reason}"))
}

/// Parse `page`, `size`, and repeated `sort` parameters.
///
/// Unknown parameters are ignored. `page` is zero-based and defaults to 0;
/// `size` defaults to [`DEFAULT_PAGE_SIZE`].
///
/// # Errors
/// Returns an `invalid_request` error for non-numeric `page`/`size`, an
/// out-of-range size, or a malformed sort expression.
pub(crate) fn parse_page_request(query: &str) -> Result<PageRequest, Error> {
    let mut page = 0_u32;
    let mut size = DEFAULT_PAGE_SIZE;
    let mut sort = Vec::new();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "page" => {
                page = value
                    .parse()
                    .map_err(|err| invalid_parameter("page", &value, err))?;
            }
            "size" => {
                size = value
                    .parse()
                    .map_err(|err| invalid_parameter("size", &value, err))?;
            }
            "sort" => sort.push(
                value
                    .parse::<SortOrder>()
                    .map_err(|err| invalid_parameter("sort", &value, err))?,
            ),
            _ => {}
        }
    }

    PageRequest::new(page, size)
        .map(|request| request.with_sort(sort))
        .map_err(|err| invalid_parameter("size", &size.to_string(), err))
}
