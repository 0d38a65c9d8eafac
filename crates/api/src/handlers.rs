// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for workflow operations.
//!
//! Handlers orchestrate parse → validate → apply over the workflow
//! engine and shape the outcome for the transport layer. Persisting the
//! updated trip and appending the audit entry remain the trip service's
//! responsibility, under a single logical write.

use crate::auth::AuthenticatedActor;
use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    AvailableTransitionsResponse, ChangeTripStatusRequest, ChangeTripStatusResponse,
    ValidationResult, WorkflowStatisticsResponse,
};
use haul_hub::{CoreError, StatusChangeResult, WorkflowEngine, workflow_statistics};
use haul_hub_audit::StatusAuditTrail;
use haul_hub_domain::{StatusChangeRequest, Trip, TripStatus};
use std::str::FromStr;

/// Warning attached to transitions whose rule is flagged for approval.
const APPROVAL_WARNING: &str = "This status change requires approval";

/// Checks a proposed transition without applying it.
///
/// # Arguments
///
/// * `engine` - The workflow engine
/// * `current` - The trip's current status
/// * `proposed` - The proposed status
/// * `actor` - The authenticated actor
#[must_use]
pub fn check_transition(
    engine: &WorkflowEngine,
    current: TripStatus,
    proposed: TripStatus,
    actor: &AuthenticatedActor,
) -> ValidationResult {
    match engine.validate_transition(current, proposed, actor.role) {
        Ok(grant) => ValidationResult {
            is_valid: true,
            error_message: None,
            warnings: if grant.requires_approval {
                vec![String::from(APPROVAL_WARNING)]
            } else {
                Vec::new()
            },
        },
        Err(CoreError::DomainViolation(domain_error)) => ValidationResult {
            is_valid: false,
            error_message: Some(domain_error.to_string()),
            warnings: Vec::new(),
        },
    }
}

/// Applies a status change to a trip on behalf of an actor.
///
/// # Arguments
///
/// * `engine` - The workflow engine
/// * `trip` - The trip whose status is changing
/// * `request` - The API request
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns an error if the proposed status string is invalid or the
/// transition is rejected.
pub fn change_trip_status(
    engine: &WorkflowEngine,
    trip: &Trip,
    request: &ChangeTripStatusRequest,
    actor: &AuthenticatedActor,
) -> Result<ChangeTripStatusResponse, ApiError> {
    let proposed: TripStatus =
        TripStatus::from_str(&request.new_status).map_err(|e| ApiError::Validation {
            message: e.to_string(),
        })?;

    let change_request: StatusChangeRequest =
        StatusChangeRequest::new(request.reason.clone(), request.notes.clone());

    let result: StatusChangeResult = engine
        .apply_status_change(
            trip,
            proposed,
            actor.role,
            &actor.id,
            &actor.name,
            &change_request,
            false,
        )
        .map_err(|e| translate_core_error(&e))?;

    let warnings: Vec<String> = if result.requires_approval {
        vec![String::from(APPROVAL_WARNING)]
    } else {
        Vec::new()
    };

    Ok(ChangeTripStatusResponse {
        trip_id: trip.trip_id.value().to_string(),
        previous_status: trip.status,
        new_status: result.updated_trip.status,
        audit_entry: result.audit_entry,
        warnings,
        message: format!(
            "Trip status changed from '{}' to '{}'",
            trip.status, proposed
        ),
    })
}

/// Lists the statuses reachable from `current` for the actor's role.
///
/// # Arguments
///
/// * `engine` - The workflow engine
/// * `current` - The trip's current status
/// * `actor` - The authenticated actor
#[must_use]
pub fn available_transitions(
    engine: &WorkflowEngine,
    current: TripStatus,
    actor: &AuthenticatedActor,
) -> AvailableTransitionsResponse {
    AvailableTransitionsResponse {
        current_status: current,
        role: actor.role,
        available: engine.available_transitions(current, actor.role),
    }
}

/// Computes workflow statistics for one trip's audit trail.
///
/// # Arguments
///
/// * `trail` - The trip's audit trail
#[must_use]
pub fn trip_statistics(trail: &StatusAuditTrail) -> WorkflowStatisticsResponse {
    WorkflowStatisticsResponse {
        trip_id: trail.trip_id().value().to_string(),
        statistics: workflow_statistics(trail),
    }
}
