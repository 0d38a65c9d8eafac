// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The trip status workflow engine.
//!
//! The engine owns an immutable transition rule table injected at the
//! composition root. It is synchronous and side-effect-free: validation
//! and application operate on caller-supplied values and return new
//! values; persistence belongs to the caller. Concurrent use needs no
//! locking.
//!
//! The engine does not guarantee that the current status it validated
//! against is still current at write time; the persistence collaborator
//! must close that race (e.g. with an optimistic version check).

use crate::audit_entry::create_audit_entry;
use crate::error::CoreError;
use haul_hub_audit::StatusAuditEntry;
use haul_hub_domain::{
    Role, StatusChangeRequest, TransitionGrant, TransitionRuleTable, Trip, TripStatus,
    validate_status_change_request,
};

/// The result of an accepted status change.
///
/// Status changes are atomic at the value level: the updated trip and its
/// audit entry are produced together, and the caller persists both under a
/// single logical write.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeResult {
    /// The trip with its new status.
    pub updated_trip: Trip,
    /// The audit entry recording this transition.
    pub audit_entry: StatusAuditEntry,
    /// Whether the matched rule is flagged for approval.
    pub requires_approval: bool,
}

/// The trip status workflow engine.
///
/// Holds the transition rule table for the lifetime of the process. All
/// methods take `&self`; the table is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowEngine {
    rules: TransitionRuleTable,
}

impl WorkflowEngine {
    /// Creates an engine over the given rule table.
    ///
    /// # Arguments
    ///
    /// * `rules` - The immutable transition rule table
    #[must_use]
    pub const fn new(rules: TransitionRuleTable) -> Self {
        Self { rules }
    }

    /// Creates an engine over the standard trip lifecycle table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TransitionRuleTable::standard())
    }

    /// The rule table this engine validates against.
    #[must_use]
    pub const fn rules(&self) -> &TransitionRuleTable {
        &self.rules
    }

    /// Validates a proposed status transition for a role.
    ///
    /// # Arguments
    ///
    /// * `current` - The trip's current status
    /// * `proposed` - The status the caller wants to move to
    /// * `role` - The role of the requesting actor
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is rejected; see
    /// [`TransitionRuleTable::validate_transition`].
    pub fn validate_transition(
        &self,
        current: TripStatus,
        proposed: TripStatus,
        role: Role,
    ) -> Result<TransitionGrant, CoreError> {
        self.rules
            .validate_transition(current, proposed, role)
            .map_err(CoreError::DomainViolation)
    }

    /// Returns the statuses reachable from `current` by the given role,
    /// in rule-table order.
    #[must_use]
    pub fn available_transitions(&self, current: TripStatus, role: Role) -> Vec<TripStatus> {
        self.rules.available_transitions(current, role)
    }

    /// Returns true if the status has no outgoing rules.
    #[must_use]
    pub fn is_final_status(&self, status: TripStatus) -> bool {
        self.rules.is_terminal(status)
    }

    /// Applies a status change to a trip.
    ///
    /// Validates the request and the transition, then produces the updated
    /// trip together with the audit entry for the change. The input trip is
    /// not mutated.
    ///
    /// # Arguments
    ///
    /// * `trip` - The trip whose status is changing
    /// * `proposed` - The status to move to
    /// * `role` - The role of the requesting actor
    /// * `changed_by` - Identifier of the actor
    /// * `changed_by_name` - Display name of the actor
    /// * `request` - Caller-supplied context for the transition
    /// * `automatic` - True for system-initiated changes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A request text field is invalid
    /// - The transition is rejected by the rule table
    #[allow(clippy::too_many_arguments)]
    pub fn apply_status_change(
        &self,
        trip: &Trip,
        proposed: TripStatus,
        role: Role,
        changed_by: &str,
        changed_by_name: &str,
        request: &StatusChangeRequest,
        automatic: bool,
    ) -> Result<StatusChangeResult, CoreError> {
        validate_status_change_request(request)?;

        let grant: TransitionGrant = self
            .rules
            .validate_transition(trip.status, proposed, role)?;

        let audit_entry: StatusAuditEntry = create_audit_entry(
            trip.trip_id.clone(),
            trip.status,
            proposed,
            changed_by,
            changed_by_name,
            request,
            automatic,
        );

        Ok(StatusChangeResult {
            updated_trip: trip.with_status(proposed),
            audit_entry,
            requires_approval: grant.requires_approval,
        })
    }
}

impl Default for WorkflowEngine {
    fn default() -> Self {
        Self::standard()
    }
}
