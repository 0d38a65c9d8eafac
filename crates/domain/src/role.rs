// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor roles for transition authorization.
//!
//! Roles are a closed set. The raw role string supplied by the identity
//! collaborator is parsed into this enum at the API boundary, so a typo in
//! a role value is rejected there instead of surfacing later as a
//! misleading "not authorized" validation failure.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role of the actor requesting a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Back-office dispatcher coordinating trips.
    Dispatcher,
    /// Driver assigned to trips.
    Driver,
    /// Owner of one or more trucks in the fleet.
    TruckOwner,
    /// System operator with full authority.
    Admin,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dispatcher => "dispatcher",
            Self::Driver => "driver",
            Self::TruckOwner => "truck_owner",
            Self::Admin => "admin",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRole` if the string is not a known role.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "dispatcher" => Ok(Self::Dispatcher),
            "driver" => Ok(Self::Driver),
            "truck_owner" => Ok(Self::TruckOwner),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
