//! Page envelopes returned by list queries.

use serde::{Deserialize, Serialize};

use crate::PageRequest;

/// Size and position information for a returned page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Requested page size.
    pub size: u32,
    /// Number of items across every page.
    pub total_elements: u64,
    /// Number of pages needed to hold `total_elements`.
    pub total_pages: u32,
    /// Zero-based number of this page.
    pub number: u32,
}

impl PageMetadata {
    /// Derive metadata for `request` over a collection of `total_elements`.
    #[must_use]
    pub fn for_request(request: &PageRequest, total_elements: u64) -> Self {
        let pages = total_elements.div_ceil(u64::from(request.size()));
        Self {
            size: request.size(),
            total_elements,
            total_pages: u32::try_from(pages).unwrap_or(u32::MAX),
            number: request.page(),
        }
    }
}

/// One slice of a collection plus its metadata.
///
/// # Examples
/// ```
/// use pagination::{Page, PageRequest};
///
/// let request = PageRequest::new(1, 10).expect("valid request");
/// let page = Page::new(vec![11, 12], &request, 30);
/// assert_eq!(page.metadata().total_pages, 3);
/// assert!(page.has_next());
/// assert!(page.has_previous());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    content: Vec<T>,
    metadata: PageMetadata,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request`.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            metadata: PageMetadata::for_request(request, total_elements),
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        self.content.as_slice()
    }

    /// Page position and totals.
    #[must_use]
    pub const fn metadata(&self) -> PageMetadata {
        self.metadata
    }

    /// Split into items and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageMetadata) {
        (self.content, self.metadata)
    }

    /// Convert each item while keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }

    /// Whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.metadata.number.saturating_add(1) < self.metadata.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.metadata.number > 0
    }

    /// Whether this is the final page (or the collection is empty).
    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Zero-based number of the final page.
    #[must_use]
    pub fn last_page_number(&self) -> u32 {
        self.metadata.total_pages.saturating_sub(1)
    }
}
