// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use haul_hub::CoreError;
use haul_hub_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. The transport layer maps them to status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request failed domain validation.
    Validation {
        /// A human-readable description of the failure.
        message: String,
    },
    /// The actor's role does not permit the requested transition.
    Unauthorized {
        /// A human-readable description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message } => write!(f, "Validation failed: {message}"),
            Self::Unauthorized { message } => write!(f, "Unauthorized: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a core error into the API error contract.
///
/// Role rejections become `Unauthorized`; every other domain violation is
/// a `Validation` failure.
#[must_use]
pub fn translate_core_error(error: &CoreError) -> ApiError {
    match error {
        CoreError::DomainViolation(domain_error) => match domain_error {
            DomainError::RoleNotAuthorized { .. } => ApiError::Unauthorized {
                message: domain_error.to_string(),
            },
            _ => ApiError::Validation {
                message: domain_error.to_string(),
            },
        },
    }
}
