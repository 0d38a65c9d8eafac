// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow statistics over a trip's audit trail.
//!
//! This is a pure, deterministic calculation over the trail type, whose
//! chronological ordering is enforced at append time.

use haul_hub_audit::{StatusAuditEntry, StatusAuditTrail};
use haul_hub_domain::TripStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One completed interval in a trip's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDwell {
    /// The status the trip was in during the interval.
    pub status: TripStatus,
    /// Length of the interval in fractional hours.
    pub hours: f64,
}

/// Aggregate statistics for one trip's status workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatistics {
    /// Total number of recorded status changes.
    pub total_changes: usize,
    /// Changes made by the system.
    pub automatic_changes: usize,
    /// Changes made by a person.
    pub manual_changes: usize,
    /// Mean dwell time in fractional hours per status.
    ///
    /// Statuses with no completed interval are absent.
    pub average_time_in_status: BTreeMap<TripStatus, f64>,
    /// Completed intervals in chronological order, for charting.
    pub status_history: Vec<StatusDwell>,
}

/// Computes workflow statistics for one trip's audit trail.
///
/// For each adjacent pair of entries, the time between them is attributed
/// to the earlier entry's `new_status` (the status that was current during
/// the interval). The final entry has no successor to bound its interval,
/// so the time spent in the trip's current status up to "now" is
/// deliberately excluded.
///
/// # Arguments
///
/// * `trail` - The trip's audit trail, chronological by construction
#[must_use]
pub fn workflow_statistics(trail: &StatusAuditTrail) -> WorkflowStatistics {
    let entries: &[StatusAuditEntry] = trail.entries();

    let total_changes: usize = entries.len();
    let automatic_changes: usize = entries.iter().filter(|e| e.automatic_change).count();
    let manual_changes: usize = total_changes - automatic_changes;

    let mut status_history: Vec<StatusDwell> = Vec::new();
    let mut dwell_sums: BTreeMap<TripStatus, (f64, usize)> = BTreeMap::new();

    for pair in entries.windows(2) {
        let hours: f64 = (pair[1].changed_at - pair[0].changed_at).as_seconds_f64() / 3600.0;
        let status: TripStatus = pair[0].new_status;

        status_history.push(StatusDwell { status, hours });

        let (sum, count) = dwell_sums.entry(status).or_insert((0.0, 0));
        *sum += hours;
        *count += 1;
    }

    // count is always >= 1 for a present key
    #[allow(clippy::cast_precision_loss)]
    let average_time_in_status: BTreeMap<TripStatus, f64> = dwell_sums
        .into_iter()
        .map(|(status, (sum, count))| (status, sum / count as f64))
        .collect();

    WorkflowStatistics {
        total_changes,
        automatic_changes,
        manual_changes,
        average_time_in_status,
        status_history,
    }
}
