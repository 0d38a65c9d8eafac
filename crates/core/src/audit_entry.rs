// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit entry construction for accepted transitions.

use haul_hub_audit::StatusAuditEntry;
use haul_hub_domain::{StatusChangeRequest, TripId, TripStatus};
use time::OffsetDateTime;
use uuid::Uuid;

/// Builds the audit entry for an accepted status transition.
///
/// Pure construction: a fresh v4 UUID and the current UTC timestamp are
/// generated here; `reason` and `notes` are copied from the request. The
/// caller is responsible for persisting the entry and appending it to the
/// trip's trail.
///
/// # Arguments
///
/// * `trip_id` - The trip whose status changed
/// * `previous_status` - Status before the transition
/// * `new_status` - Status after the transition
/// * `changed_by` - Identifier of the actor who made the change
/// * `changed_by_name` - Display name of the actor
/// * `request` - Caller-supplied context for the transition
/// * `automatic` - True for system-initiated changes
#[must_use]
pub fn create_audit_entry(
    trip_id: TripId,
    previous_status: TripStatus,
    new_status: TripStatus,
    changed_by: &str,
    changed_by_name: &str,
    request: &StatusChangeRequest,
    automatic: bool,
) -> StatusAuditEntry {
    StatusAuditEntry::new(
        Uuid::new_v4(),
        trip_id,
        previous_status,
        new_status,
        changed_by.to_string(),
        changed_by_name.to_string(),
        OffsetDateTime::now_utc(),
        request.reason.clone(),
        request.notes.clone(),
        automatic,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_copies_request_context() {
        let request: StatusChangeRequest = StatusChangeRequest::new(
            Some(String::from("Load picked up at dock 4")),
            Some(String::from("Shipper was 20 minutes late")),
        );

        let entry: StatusAuditEntry = create_audit_entry(
            TripId::new("trip-001"),
            TripStatus::Scheduled,
            TripStatus::PickedUp,
            "user-123",
            "Dana Dispatcher",
            &request,
            false,
        );

        assert_eq!(entry.trip_id.value(), "trip-001");
        assert_eq!(entry.previous_status, TripStatus::Scheduled);
        assert_eq!(entry.new_status, TripStatus::PickedUp);
        assert_eq!(entry.changed_by, "user-123");
        assert_eq!(entry.changed_by_name, "Dana Dispatcher");
        assert_eq!(entry.reason.as_deref(), Some("Load picked up at dock 4"));
        assert_eq!(entry.notes.as_deref(), Some("Shipper was 20 minutes late"));
        assert!(!entry.automatic_change);
    }

    #[test]
    fn test_each_entry_gets_fresh_id() {
        let request: StatusChangeRequest = StatusChangeRequest::default();

        let first: StatusAuditEntry = create_audit_entry(
            TripId::new("trip-001"),
            TripStatus::Scheduled,
            TripStatus::PickedUp,
            "user-123",
            "Dana Dispatcher",
            &request,
            false,
        );
        let second: StatusAuditEntry = create_audit_entry(
            TripId::new("trip-001"),
            TripStatus::Scheduled,
            TripStatus::PickedUp,
            "user-123",
            "Dana Dispatcher",
            &request,
            false,
        );

        assert_ne!(first.audit_id, second.audit_id);
    }

    #[test]
    fn test_automatic_flag_recorded() {
        let request: StatusChangeRequest = StatusChangeRequest::default();

        let entry: StatusAuditEntry = create_audit_entry(
            TripId::new("trip-001"),
            TripStatus::PickedUp,
            TripStatus::InTransit,
            "system",
            "ELD integration",
            &request,
            true,
        );

        assert!(entry.automatic_change);
    }
}
