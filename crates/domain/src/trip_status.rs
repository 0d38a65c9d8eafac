// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Trip status states.
//!
//! This module defines the closed set of lifecycle statuses a trip moves
//! through. Which transitions between them are permitted is governed by the
//! transition rule table, not by the status type itself.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a trip.
///
/// Status is tracked per trip and changes only through validated
/// transitions. Terminality is a property of the rule table: a status with
/// no outgoing rules cannot be left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Trip is booked with a pickup appointment but has not started.
    Scheduled,
    /// The driver has picked up the load.
    PickedUp,
    /// The load is moving toward its destination.
    InTransit,
    /// The load has been delivered to the consignee.
    Delivered,
    /// The broker payment for the trip has been received.
    Paid,
    /// The trip was canceled before completion.
    Canceled,
}

impl TripStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::PickedUp => "picked_up",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Paid => "paid",
            Self::Canceled => "canceled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTripStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "picked_up" => Ok(Self::PickedUp),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "paid" => Ok(Self::Paid),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidTripStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns every status in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Scheduled,
            Self::PickedUp,
            Self::InTransit,
            Self::Delivered,
            Self::Paid,
            Self::Canceled,
        ]
    }
}

impl FromStr for TripStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
