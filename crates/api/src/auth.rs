// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor identity at the API boundary.
//!
//! The identity collaborator supplies a user id, display name and raw
//! role string per request. The role string is parsed into the closed
//! [`Role`] enum here, so an invalid role value is rejected at the
//! boundary instead of producing a misleading "not authorized" result
//! deeper in the engine.

use haul_hub_domain::Role;
use std::str::FromStr;

/// An authenticated actor with a validated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// Display name for audit attribution.
    pub name: String,
    /// The validated role of this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `name` - Display name for audit attribution
    /// * `role` - The validated role
    #[must_use]
    pub const fn new(id: String, name: String, role: Role) -> Self {
        Self { id, name, role }
    }
}

/// Authentication and role-validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The supplied role string is not a known role.
    UnknownRole {
        /// The unrecognized role string.
        role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::UnknownRole { role } => write!(f, "Unknown role: '{role}'"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Stub authentication function.
///
/// This is a minimal placeholder: real credential checking belongs to the
/// identity collaborator and is out of scope. What is NOT a placeholder is
/// the role validation - the raw role string is parsed into the closed
/// role set here and unknown values are rejected.
///
/// # Arguments
///
/// * `user_id` - The identifier of the actor to authenticate
/// * `user_name` - Display name for audit attribution
/// * `role` - The raw role string from the identity context
///
/// # Returns
///
/// An authenticated actor with a validated role.
///
/// # Errors
///
/// Returns an error if the user id is empty or the role string is not a
/// known role.
pub fn authenticate_stub(
    user_id: &str,
    user_name: &str,
    role: &str,
) -> Result<AuthenticatedActor, AuthError> {
    if user_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("User ID cannot be empty"),
        });
    }

    let parsed_role: Role = Role::from_str(role).map_err(|_| AuthError::UnknownRole {
        role: role.to_string(),
    })?;

    Ok(AuthenticatedActor::new(
        user_id.to_string(),
        user_name.to_string(),
        parsed_role,
    ))
}
