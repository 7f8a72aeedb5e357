//! Errors raised while building page requests.

/// Failure to construct a [`crate::PageRequest`] or [`crate::SortOrder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The requested page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// The requested page size exceeded the configured ceiling.
    #[error("page size must be at most {max}, got {requested}")]
    PageSizeTooLarge {
        /// Largest accepted page size.
        max: u32,
        /// Page size supplied by the caller.
        requested: u32,
    },
    /// A sort expression named no property.
    #[error("sort property must not be empty")]
    EmptySortProperty,
    /// A sort expression used a direction other than `ASC` or `DESC`.
    #[error("sort direction must be ASC or DESC, got {value}")]
    InvalidSortDirection {
        /// Direction token supplied by the caller.
        value: String,
    },
}
