// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier newtypes and small shared value types.

use serde::{Deserialize, Serialize};
use time::Date;

/// Represents a trip identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId {
    /// The identifier value assigned by the trip service.
    value: String,
}

impl TripId {
    /// Creates a new `TripId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a driver identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverId {
    /// The identifier value.
    value: String,
}

impl DriverId {
    /// Creates a new `DriverId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a vehicle (lorry) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LorryId {
    /// The identifier value.
    value: String,
}

impl LorryId {
    /// Creates a new `LorryId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for LorryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a freight broker identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrokerId {
    /// The identifier value.
    value: String,
}

impl BrokerId {
    /// Creates a new `BrokerId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BrokerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Caller-supplied context for a status transition.
///
/// Both fields are optional free text; they are copied verbatim onto the
/// audit entry produced for the transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// Why the transition was requested.
    pub reason: Option<String>,
    /// Additional operational notes.
    pub notes: Option<String>,
}

impl StatusChangeRequest {
    /// Creates a new `StatusChangeRequest`.
    ///
    /// # Arguments
    ///
    /// * `reason` - Why the transition was requested
    /// * `notes` - Additional operational notes
    #[must_use]
    pub const fn new(reason: Option<String>, notes: Option<String>) -> Self {
        Self { reason, notes }
    }
}

/// An inclusive-start calendar date window.
///
/// Supplied by the read collaborator alongside a filtered trip collection,
/// and used as the denominator window for utilization rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window.
    pub start: Date,
    /// Day the window ends on.
    pub end: Date,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Arguments
    ///
    /// * `start` - First day of the window
    /// * `end` - Day the window ends on
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns the number of days the window spans, floored at 1.
    ///
    /// A window from day D to day D+10 spans 10 days.
    #[must_use]
    pub fn span_days(&self) -> u32 {
        let days: i64 = (self.end - self.start).whole_days();
        u32::try_from(days.max(1)).unwrap_or(1)
    }
}
