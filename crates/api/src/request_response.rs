// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use haul_hub::WorkflowStatistics;
use haul_hub_audit::StatusAuditEntry;
use haul_hub_domain::{Role, TripStatus};

/// API request to change a trip's status.
///
/// The proposed status arrives as a string and is parsed against the
/// closed status set before validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeTripStatusRequest {
    /// The proposed status.
    pub new_status: String,
    /// Why the transition was requested.
    pub reason: Option<String>,
    /// Additional operational notes.
    pub notes: Option<String>,
}

/// API response for an accepted status change.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChangeTripStatusResponse {
    /// The trip whose status changed.
    pub trip_id: String,
    /// Status before the transition.
    pub previous_status: TripStatus,
    /// Status after the transition.
    pub new_status: TripStatus,
    /// The audit entry to append to the trip's trail.
    pub audit_entry: StatusAuditEntry,
    /// Warnings attached to the accepted change.
    pub warnings: Vec<String>,
    /// A success message.
    pub message: String,
}

/// The outcome of a transition check, shaped for the transport layer.
///
/// The transport layer maps `is_valid` to its 2xx/4xx decision; this
/// engine does not choose status codes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    /// Whether the proposed transition is valid.
    pub is_valid: bool,
    /// Why the transition was rejected, when invalid.
    pub error_message: Option<String>,
    /// Warnings attached to a valid transition.
    pub warnings: Vec<String>,
}

/// API response listing the statuses reachable for a role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailableTransitionsResponse {
    /// The trip's current status.
    pub current_status: TripStatus,
    /// The role the listing was computed for.
    pub role: Role,
    /// Reachable statuses in rule-table order.
    pub available: Vec<TripStatus>,
}

/// API response for workflow statistics over one trip's trail.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkflowStatisticsResponse {
    /// The trip the statistics are for.
    pub trip_id: String,
    /// The computed statistics.
    pub statistics: WorkflowStatistics,
}
