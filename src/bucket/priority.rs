//! Type-safe priority wrapper
//!
//! Priorities are plain signed integers compared numerically. Higher values
//! are visited first during traversal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority attached to a value at push time
///
/// Ordering is the natural numeric ordering of the inner `i64`, so
/// `Priority(10) > Priority(2)` and `Priority(0) > Priority(-1)`.
/// The default priority is `0`.
#[derive(
    Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    /// The priority used when none is given
    pub const DEFAULT: Self = Self(0);

    /// Create a priority from a raw integer
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
