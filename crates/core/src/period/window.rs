//! Calendar date windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A half-open date window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First date inside the window.
    pub start: NaiveDate,
    /// First date past the window.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the date falls within `[start, end)`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Returns true if `end` precedes `start`.
    ///
    /// An inverted window is a caller error; an empty window (`start ==
    /// end`) is valid and contains no dates.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}
