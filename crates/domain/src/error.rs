// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::role::Role;
use crate::trip_status::TripStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Trip status string is not a member of the closed status set.
    InvalidTripStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Role string is not a member of the closed role set.
    InvalidRole {
        /// The unrecognized role string.
        role: String,
    },
    /// Proposed status equals the current status.
    SameStatusTransition {
        /// The status in question.
        status: TripStatus,
    },
    /// No rule exists for the `(from, to)` pair.
    TransitionNotDefined {
        /// The current status.
        from: TripStatus,
        /// The proposed status.
        to: TripStatus,
    },
    /// A rule exists but does not permit the requesting role.
    RoleNotAuthorized {
        /// The requesting role.
        role: Role,
        /// The current status.
        from: TripStatus,
        /// The proposed status.
        to: TripStatus,
    },
    /// Trip identifier is empty or invalid.
    InvalidTripId(String),
    /// Driver identifier is empty or invalid.
    InvalidDriverId(String),
    /// Lorry identifier is empty or invalid.
    InvalidLorryId(String),
    /// A monetary amount is negative.
    NegativeAmount {
        /// The field carrying the amount.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Trip distance is negative.
    NegativeDistance {
        /// The offending value.
        value: f64,
    },
    /// A free-text field exceeds its maximum length.
    TextTooLong {
        /// The field carrying the text.
        field: &'static str,
        /// The maximum permitted length.
        max: usize,
        /// The actual length.
        actual: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTripStatus { status } => {
                write!(f, "Invalid trip status: '{status}'")
            }
            Self::InvalidRole { role } => write!(f, "Invalid role: '{role}'"),
            Self::SameStatusTransition { status } => {
                write!(
                    f,
                    "New status must differ from current status '{status}'"
                )
            }
            Self::TransitionNotDefined { from, to } => {
                write!(f, "No transition is defined from '{from}' to '{to}'")
            }
            Self::RoleNotAuthorized { role, from, to } => {
                write!(
                    f,
                    "Role '{role}' is not authorized to change status from '{from}' to '{to}'"
                )
            }
            Self::InvalidTripId(msg) => write!(f, "Invalid trip id: {msg}"),
            Self::InvalidDriverId(msg) => write!(f, "Invalid driver id: {msg}"),
            Self::InvalidLorryId(msg) => write!(f, "Invalid lorry id: {msg}"),
            Self::NegativeAmount { field, value } => {
                write!(f, "Amount '{field}' must not be negative, got {value}")
            }
            Self::NegativeDistance { value } => {
                write!(f, "Distance must not be negative, got {value}")
            }
            Self::TextTooLong { field, max, actual } => {
                write!(
                    f,
                    "Field '{field}' exceeds maximum length {max} (got {actual})"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
