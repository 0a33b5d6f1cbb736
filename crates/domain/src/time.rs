//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// UTC timestamp used for reading times and period bounds.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// A closed time interval `[start, end]` bounding reading queries.
///
/// Both bounds are inclusive. `start == end` is a valid one-instant window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    start: Timestamp,
    end: Timestamp,
}

impl Period {
    /// Build a period from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PeriodStartAfterEnd`] when `start > end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::PeriodStartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Whether `ts` falls inside the period, bounds included.
    #[must_use]
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts <= self.end
    }
}
