// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transition rule table and status transition validation.
//!
//! A transition is legal only if an explicit rule exists for the exact
//! `(from, to)` pair and the requesting role is in that rule's allowed
//! set. The table is built once at the composition root and injected by
//! reference wherever validation happens; it is never mutated at runtime.
//!
//! Terminality is derived: a status with no outgoing rules is terminal.
//! There is no separate hardcoded list of final statuses.

use crate::error::DomainError;
use crate::role::Role;
use crate::trip_status::TripStatus;
use std::collections::BTreeSet;

/// A single permitted `(from, to)` status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransitionRule {
    /// The status the trip must currently be in.
    pub from: TripStatus,
    /// The status the trip moves to.
    pub to: TripStatus,
    /// Roles permitted to perform this transition.
    pub allowed_roles: Vec<Role>,
    /// Whether this transition should be flagged for approval.
    ///
    /// No approval gate exists in this engine; the flag only surfaces as
    /// a warning to the caller.
    pub requires_approval: bool,
}

impl StatusTransitionRule {
    /// Creates a new transition rule.
    ///
    /// # Arguments
    ///
    /// * `from` - The status the trip must currently be in
    /// * `to` - The status the trip moves to
    /// * `allowed_roles` - Roles permitted to perform this transition
    /// * `requires_approval` - Whether the transition is flagged for approval
    #[must_use]
    pub const fn new(
        from: TripStatus,
        to: TripStatus,
        allowed_roles: Vec<Role>,
        requires_approval: bool,
    ) -> Self {
        Self {
            from,
            to,
            allowed_roles,
            requires_approval,
        }
    }

    /// Returns true if the given role may perform this transition.
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// A granted transition.
///
/// Carries the approval flag of the matched rule so the boundary layer can
/// attach a warning; validity itself is unaffected by the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionGrant {
    /// Whether the matched rule is flagged for approval.
    pub requires_approval: bool,
}

/// The immutable table of legal status transitions.
///
/// The table is an ordered list; `available_transitions` preserves table
/// order. The set of terminal statuses is derived from the table at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRuleTable {
    rules: Vec<StatusTransitionRule>,
    /// Statuses with no outgoing rules, derived once at construction.
    terminal: BTreeSet<TripStatus>,
}

impl TransitionRuleTable {
    /// Builds a table from an ordered list of rules.
    ///
    /// # Arguments
    ///
    /// * `rules` - The ordered rule list. Must not contain duplicate
    ///   `(from, to)` pairs.
    #[must_use]
    pub fn new(rules: Vec<StatusTransitionRule>) -> Self {
        let terminal: BTreeSet<TripStatus> = TripStatus::all()
            .into_iter()
            .filter(|status| !rules.iter().any(|rule| rule.from == *status))
            .collect();

        Self { rules, terminal }
    }

    /// The standard trip lifecycle rule table.
    ///
    /// Scheduled, PickedUp, InTransit and Delivered each have outgoing
    /// rules; Paid and Canceled have none and are therefore terminal.
    /// Mid-trip cancellations are flagged for approval.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            StatusTransitionRule::new(
                TripStatus::Scheduled,
                TripStatus::PickedUp,
                vec![Role::Dispatcher, Role::Driver, Role::Admin],
                false,
            ),
            StatusTransitionRule::new(
                TripStatus::Scheduled,
                TripStatus::Canceled,
                vec![Role::Dispatcher, Role::Admin],
                false,
            ),
            StatusTransitionRule::new(
                TripStatus::PickedUp,
                TripStatus::InTransit,
                vec![Role::Dispatcher, Role::Driver, Role::Admin],
                false,
            ),
            StatusTransitionRule::new(
                TripStatus::PickedUp,
                TripStatus::Canceled,
                vec![Role::Dispatcher, Role::Admin],
                true,
            ),
            StatusTransitionRule::new(
                TripStatus::InTransit,
                TripStatus::Delivered,
                vec![Role::Dispatcher, Role::Driver, Role::Admin],
                false,
            ),
            StatusTransitionRule::new(
                TripStatus::InTransit,
                TripStatus::Canceled,
                vec![Role::Dispatcher, Role::Admin],
                true,
            ),
            StatusTransitionRule::new(
                TripStatus::Delivered,
                TripStatus::Paid,
                vec![Role::Dispatcher, Role::TruckOwner, Role::Admin],
                false,
            ),
        ])
    }

    /// Returns the rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[StatusTransitionRule] {
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
    /// # Returns
    ///
    /// A `TransitionGrant` carrying the matched rule's approval flag.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The proposed status equals the current status
    /// - No rule exists for the `(current, proposed)` pair
    /// - A rule exists but does not permit the role
    pub fn validate_transition(
        &self,
        current: TripStatus,
        proposed: TripStatus,
        role: Role,
    ) -> Result<TransitionGrant, DomainError> {
        if current == proposed {
            return Err(DomainError::SameStatusTransition { status: current });
        }

        let rule: &StatusTransitionRule = self
            .rules
            .iter()
            .find(|rule| rule.from == current && rule.to == proposed)
            .ok_or(DomainError::TransitionNotDefined {
                from: current,
                to: proposed,
            })?;

        if !rule.permits(role) {
            return Err(DomainError::RoleNotAuthorized {
                role,
                from: current,
                to: proposed,
            });
        }

        Ok(TransitionGrant {
            requires_approval: rule.requires_approval,
        })
    }

    /// Returns the statuses reachable from `current` by the given role.
    ///
    /// Results are in table order. The table has no duplicate `(from, to)`
    /// pairs, so no deduplication is needed.
    #[must_use]
    pub fn available_transitions(&self, current: TripStatus, role: Role) -> Vec<TripStatus> {
        self.rules
            .iter()
            .filter(|rule| rule.from == current && rule.permits(role))
            .map(|rule| rule.to)
            .collect()
    }

    /// Returns true if the status has no outgoing rules.
    #[must_use]
    pub fn is_terminal(&self, status: TripStatus) -> bool {
        self.terminal.contains(&status)
    }

    /// Returns the derived set of terminal statuses.
    #[must_use]
    pub const fn terminal_statuses(&self) -> &BTreeSet<TripStatus> {
        &self.terminal
    }
}

impl Default for TransitionRuleTable {
    fn default() -> Self {
        Self::standard()
    }
}
