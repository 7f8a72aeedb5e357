//! Page-number pagination primitives for list endpoints.
//!
//! The crate keeps transport and persistence concerns out of the way: a
//! [`PageRequest`] describes which slice of a collection a caller wants and
//! how it is ordered, a [`Page`] carries the slice back together with its
//! [`PageMetadata`], and [`page_link`] renders navigation URLs that preserve
//! the caller's size and sort choices.
//!
//! Page numbers are zero-based.

mod error;
mod links;
mod page;
mod request;
mod sort;

pub use error::PaginationError;
pub use links::page_link;
pub use page::{Page, PageMetadata};
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use sort::{Direction, SortOrder};
