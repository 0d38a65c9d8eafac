// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Audit types and invariants.
//!
//! Every accepted status transition produces exactly one audit entry.
//! Entries are immutable once created and are never updated or deleted;
//! the trail for a trip is append-only and non-decreasing in `changed_at`.

use haul_hub_domain::{TripId, TripStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// An immutable audit record for one accepted status transition.
///
/// Captures who changed the status, from what to what, when, and the
/// caller-supplied context. Persisted verbatim by the trip service and
/// re-read later for workflow statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAuditEntry {
    /// Unique identifier for this entry.
    pub audit_id: Uuid,
    /// The trip whose status changed.
    pub trip_id: TripId,
    /// Status before the transition.
    pub previous_status: TripStatus,
    /// Status after the transition.
    pub new_status: TripStatus,
    /// Identifier of the actor who made the change.
    pub changed_by: String,
    /// Display name of the actor who made the change.
    pub changed_by_name: String,
    /// When the change was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub changed_at: OffsetDateTime,
    /// Why the transition was requested, if given.
    pub reason: Option<String>,
    /// Additional operational notes, if given.
    pub notes: Option<String>,
    /// True when the change was made by the system rather than a person.
    pub automatic_change: bool,
}

impl StatusAuditEntry {
    /// Creates a new audit entry.
    ///
    /// Once created, an audit entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `audit_id` - Unique identifier for this entry
    /// * `trip_id` - The trip whose status changed
    /// * `previous_status` - Status before the transition
    /// * `new_status` - Status after the transition
    /// * `changed_by` - Identifier of the actor who made the change
    /// * `changed_by_name` - Display name of the actor
    /// * `changed_at` - When the change was recorded
    /// * `reason` - Why the transition was requested
    /// * `notes` - Additional operational notes
    /// * `automatic_change` - True for system-initiated changes
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        audit_id: Uuid,
        trip_id: TripId,
        previous_status: TripStatus,
        new_status: TripStatus,
        changed_by: String,
        changed_by_name: String,
        changed_at: OffsetDateTime,
        reason: Option<String>,
        notes: Option<String>,
        automatic_change: bool,
    ) -> Self {
        Self {
            audit_id,
            trip_id,
            previous_status,
            new_status,
            changed_by,
            changed_by_name,
            changed_at,
            reason,
            notes,
            automatic_change,
        }
    }
}

/// Errors that can occur while building an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// An appended entry is older than the current tail of the trail.
    OutOfOrderEntry {
        /// The timestamp of the current tail.
        last_changed_at: OffsetDateTime,
        /// The timestamp of the rejected entry.
        entry_changed_at: OffsetDateTime,
    },
    /// An appended entry belongs to a different trip.
    TripMismatch {
        /// The trip the trail is for.
        expected: String,
        /// The trip on the rejected entry.
        actual: String,
    },
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfOrderEntry {
                last_changed_at,
                entry_changed_at,
            } => {
                write!(
                    f,
                    "Audit entry at {entry_changed_at} is older than the trail tail at {last_changed_at}"
                )
            }
            Self::TripMismatch { expected, actual } => {
                write!(
                    f,
                    "Audit entry for trip '{actual}' cannot be appended to the trail of trip '{expected}'"
                )
            }
        }
    }
}

impl std::error::Error for AuditError {}

/// The append-only, time-ordered audit trail for one trip.
///
/// Chronological order is an invariant of the type, not a convention:
/// `append` rejects an entry whose `changed_at` precedes the current tail,
/// so any consumer of a trail may rely on non-decreasing timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrail")]
pub struct StatusAuditTrail {
    /// The trip this trail belongs to.
    trip_id: TripId,
    /// Entries in append order.
    entries: Vec<StatusAuditEntry>,
}

/// Deserialization shape for [`StatusAuditTrail`].
///
/// Routing deserialization through `from_entries` keeps the ordering
/// invariant intact for trails read back from storage.
#[derive(Debug, Deserialize)]
struct RawTrail {
    trip_id: TripId,
    entries: Vec<StatusAuditEntry>,
}

impl TryFrom<RawTrail> for StatusAuditTrail {
    type Error = AuditError;

    fn try_from(raw: RawTrail) -> Result<Self, Self::Error> {
        Self::from_entries(raw.trip_id, raw.entries)
    }
}

impl StatusAuditTrail {
    /// Creates an empty trail for a trip.
    ///
    /// # Arguments
    ///
    /// * `trip_id` - The trip this trail belongs to
    #[must_use]
    pub const fn new(trip_id: TripId) -> Self {
        Self {
            trip_id,
            entries: Vec::new(),
        }
    }

    /// Builds a trail from entries already in chronological order.
    ///
    /// # Arguments
    ///
    /// * `trip_id` - The trip this trail belongs to
    /// * `entries` - Entries in non-decreasing `changed_at` order
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is out of order or belongs to a
    /// different trip.
    pub fn from_entries(
        trip_id: TripId,
        entries: Vec<StatusAuditEntry>,
    ) -> Result<Self, AuditError> {
        let mut trail: Self = Self::new(trip_id);
        for entry in entries {
            trail.append(entry)?;
        }
        Ok(trail)
    }

    /// Appends an entry to the trail.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to append
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry's `changed_at` precedes the current tail's
    /// - The entry belongs to a different trip
    pub fn append(&mut self, entry: StatusAuditEntry) -> Result<(), AuditError> {
        if entry.trip_id != self.trip_id {
            return Err(AuditError::TripMismatch {
                expected: self.trip_id.value().to_string(),
                actual: entry.trip_id.value().to_string(),
            });
        }

        if let Some(last) = self.entries.last()
            && entry.changed_at < last.changed_at
        {
            return Err(AuditError::OutOfOrderEntry {
                last_changed_at: last.changed_at,
                entry_changed_at: entry.changed_at,
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// The trip this trail belongs to.
    #[must_use]
    pub const fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    /// The entries in chronological order.
    #[must_use]
    pub fn entries(&self) -> &[StatusAuditEntry] {
        &self.entries
    }

    /// Number of entries in the trail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the trail has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn make_entry(trip: &str, at: OffsetDateTime) -> StatusAuditEntry {
        StatusAuditEntry::new(
            Uuid::new_v4(),
            TripId::new(trip),
            TripStatus::Scheduled,
            TripStatus::PickedUp,
            String::from("user-123"),
            String::from("Dana Dispatcher"),
            at,
            Some(String::from("Driver arrived at shipper")),
            None,
            false,
        )
    }

    #[test]
    fn test_entry_creation_requires_all_fields() {
        let entry: StatusAuditEntry = make_entry("trip-001", datetime!(2026-03-01 08:00 UTC));

        assert_eq!(entry.trip_id.value(), "trip-001");
        assert_eq!(entry.previous_status, TripStatus::Scheduled);
        assert_eq!(entry.new_status, TripStatus::PickedUp);
        assert_eq!(entry.changed_by, "user-123");
        assert!(!entry.automatic_change);
    }

    #[test]
    fn test_entry_is_immutable_once_created() {
        let entry: StatusAuditEntry = make_entry("trip-001", datetime!(2026-03-01 08:00 UTC));

        // Clone the entry to verify it can be cloned but not mutated
        let cloned: StatusAuditEntry = entry.clone();
        assert_eq!(entry, cloned);
        assert_eq!(entry.reason.as_deref(), Some("Driver arrived at shipper"));
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry: StatusAuditEntry = make_entry("trip-001", datetime!(2026-03-01 08:00 UTC));

        let json: String = serde_json::to_string(&entry).unwrap();
        let parsed: StatusAuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, parsed);
    }

    #[test]
    fn test_append_in_order() {
        let mut trail: StatusAuditTrail = StatusAuditTrail::new(TripId::new("trip-001"));

        trail
            .append(make_entry("trip-001", datetime!(2026-03-01 08:00 UTC)))
            .unwrap();
        trail
            .append(make_entry("trip-001", datetime!(2026-03-01 10:00 UTC)))
            .unwrap();

        assert_eq!(trail.len(), 2);
        assert!(!trail.is_empty());
    }

    #[test]
    fn test_append_same_timestamp_allowed() {
        let mut trail: StatusAuditTrail = StatusAuditTrail::new(TripId::new("trip-001"));
        let at: OffsetDateTime = datetime!(2026-03-01 08:00 UTC);

        trail.append(make_entry("trip-001", at)).unwrap();
        trail.append(make_entry("trip-001", at)).unwrap();

        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_out_of_order_append_rejected() {
        let mut trail: StatusAuditTrail = StatusAuditTrail::new(TripId::new("trip-001"));

        trail
            .append(make_entry("trip-001", datetime!(2026-03-01 10:00 UTC)))
            .unwrap();
        let result = trail.append(make_entry("trip-001", datetime!(2026-03-01 08:00 UTC)));

        assert!(matches!(result, Err(AuditError::OutOfOrderEntry { .. })));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_wrong_trip_append_rejected() {
        let mut trail: StatusAuditTrail = StatusAuditTrail::new(TripId::new("trip-001"));

        let result = trail.append(make_entry("trip-002", datetime!(2026-03-01 08:00 UTC)));

        assert!(matches!(result, Err(AuditError::TripMismatch { .. })));
        assert!(trail.is_empty());
    }

    #[test]
    fn test_from_entries_validates_order() {
        let entries: Vec<StatusAuditEntry> = vec![
            make_entry("trip-001", datetime!(2026-03-01 10:00 UTC)),
            make_entry("trip-001", datetime!(2026-03-01 08:00 UTC)),
        ];

        let result = StatusAuditTrail::from_entries(TripId::new("trip-001"), entries);
        assert!(result.is_err());
    }

    #[test]
    fn test_trail_serde_round_trip() {
        let entries: Vec<StatusAuditEntry> = vec![
            make_entry("trip-001", datetime!(2026-03-01 08:00 UTC)),
            make_entry("trip-001", datetime!(2026-03-01 10:00 UTC)),
        ];
        let trail: StatusAuditTrail =
            StatusAuditTrail::from_entries(TripId::new("trip-001"), entries).unwrap();

        let json: String = serde_json::to_string(&trail).unwrap();
        let parsed: StatusAuditTrail = serde_json::from_str(&json).unwrap();

        assert_eq!(trail, parsed);
    }
}
