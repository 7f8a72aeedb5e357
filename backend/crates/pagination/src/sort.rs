//! Sort expressions of the form `property[,ASC|DESC]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PaginationError;

/// Ordering direction for a sorted property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Smallest values first.
    #[default]
    Asc,
    /// Largest values first.
    Desc,
}

impl Direction {
    /// Upper-case token used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PaginationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(PaginationError::InvalidSortDirection {
                value: value.to_owned(),
            }),
        }
    }
}

/// A single ordering criterion.
///
/// # Examples
/// ```
/// use pagination::{Direction, SortOrder};
///
/// let order: SortOrder = "id,DESC".parse().expect("valid sort");
/// assert_eq!(order.property(), "id");
/// assert_eq!(order.direction(), Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    property: String,
    direction: Direction,
}

impl SortOrder {
    /// Build an order over `property`.
    ///
    /// # Errors
    /// Returns [`PaginationError::EmptySortProperty`] when the property is
    /// blank.
    pub fn new(property: impl Into<String>, direction: Direction) -> Result<Self, PaginationError> {
        let raw = property.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PaginationError::EmptySortProperty);
        }
        Ok(Self {
            property: trimmed.to_owned(),
            direction,
        })
    }

    /// Ascending order over `property`.
    ///
    /// # Errors
    /// Returns [`PaginationError::EmptySortProperty`] when the property is
    /// blank.
    pub fn asc(property: impl Into<String>) -> Result<Self, PaginationError> {
        Self::new(property, Direction::Asc)
    }

    /// Descending order over `property`.
    ///
    /// # Errors
    /// Returns [`PaginationError::EmptySortProperty`] when the property is
    /// blank.
    pub fn desc(property: impl Into<String>) -> Result<Self, PaginationError> {
        Self::new(property, Direction::Desc)
    }

    /// Property name as supplied by the caller.
    #[must_use]
    pub fn property(&self) -> &str {
        self.property.as_str()
    }

    /// Requested direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction)
    }
}

impl FromStr for SortOrder {
    type Err = PaginationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once(',') {
            Some((property, direction)) => Self::new(property, direction.parse()?),
            None => Self::asc(value),
        }
    }
}
