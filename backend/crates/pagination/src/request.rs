//! Page requests: which page, how large, and in what order.

use serde::{Deserialize, Serialize};

use crate::{PaginationError, SortOrder};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based page request with optional sort orders.
///
/// ## Invariants
/// - `size` is in `1..=MAX_PAGE_SIZE`.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, SortOrder};
///
/// let request = PageRequest::new(1, 10)
///     .expect("valid page request")
///     .with_sort(vec![SortOrder::desc("id").expect("valid sort")]);
/// assert_eq!(request.offset(), 10);
/// assert_eq!(request.sort().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Vec<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Build a request for `page` (zero-based) holding `size` items.
    ///
    /// # Errors
    /// Returns [`PaginationError::ZeroPageSize`] or
    /// [`PaginationError::PageSizeTooLarge`] when `size` is out of range.
    pub const fn new(page: u32, size: u32) -> Result<Self, PaginationError> {
        if size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PaginationError::PageSizeTooLarge {
                max: MAX_PAGE_SIZE,
                requested: size,
            });
        }
        Ok(Self {
            page,
            size,
            sort: Vec::new(),
        })
    }

    /// Replace the sort orders.
    #[must_use]
    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Sort orders in priority order.
    #[must_use]
    pub fn sort(&self) -> &[SortOrder] {
        self.sort.as_slice()
    }

    /// Number of items preceding this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        // Widening multiplication cannot overflow u64.
        u64::from(self.page) * u64::from(self.size)
    }

    /// Same size and sort, different page number.
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}
