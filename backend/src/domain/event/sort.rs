//! Properties events may be ordered by.

use std::str::FromStr;

use pagination::PageRequest;

use crate::domain::Error;

/// Sortable event property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSortField {
    /// Identifier.
    Id,
    /// Display name.
    Name,
    /// Enrollment opening time.
    BeginEnrollmentDateTime,
    /// Enrollment closing time.
    CloseEnrollmentDateTime,
    /// Start time.
    BeginEventDateTime,
    /// End time.
    EndEventDateTime,
    /// Entry price.
    BasePrice,
    /// Price ceiling.
    MaxPrice,
    /// Attendee limit.
    LimitOfEnrollment,
}

/// Error returned for a property that events cannot be sorted by.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot sort events by '{0}'")]
pub struct UnsortableProperty(pub String);

impl FromStr for EventSortField {
    type Err = UnsortableProperty;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "beginEnrollmentDateTime" => Ok(Self::BeginEnrollmentDateTime),
            "closeEnrollmentDateTime" => Ok(Self::CloseEnrollmentDateTime),
            "beginEventDateTime" => Ok(Self::BeginEventDateTime),
            "endEventDateTime" => Ok(Self::EndEventDateTime),
            "basePrice" => Ok(Self::BasePrice),
            "maxPrice" => Ok(Self::MaxPrice),
            "limitOfEnrollment" => Ok(Self::LimitOfEnrollment),
            other => Err(UnsortableProperty(other.to_owned())),
        }
    }
}

/// Reject page requests that sort by an unknown property.
///
/// # Errors
/// Returns an `invalid_request` [`Error`] naming the first unknown
/// property.
pub fn ensure_sortable(request: &PageRequest) -> Result<(), Error> {
    request
        .sort()
        .iter()
        .try_for_each(|order| order.property().parse::<EventSortField>().map(drop))
        .map_err(|err| Error::invalid_request(err.to_string()))
}
