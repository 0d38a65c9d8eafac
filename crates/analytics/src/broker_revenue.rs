// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-broker revenue breakdown.

use crate::support::mean;
use haul_hub_domain::{BrokerId, Trip};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Revenue figures for one broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerRevenue {
    /// The broker.
    pub broker_id: BrokerId,
    /// Display name of the broker, taken from the most recent record seen.
    pub broker_name: String,
    /// Trips booked through the broker.
    pub total_trips: usize,
    /// Sum of broker payments.
    pub total_revenue: f64,
    /// Mean broker payment per trip.
    pub average_revenue: f64,
}

/// Computes per-broker revenue, sorted descending by revenue.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
#[must_use]
pub fn broker_revenue(trips: &[Trip]) -> Vec<BrokerRevenue> {
    let mut by_broker: BTreeMap<&BrokerId, Vec<&Trip>> = BTreeMap::new();
    for trip in trips {
        by_broker.entry(&trip.broker_id).or_default().push(trip);
    }

    let mut revenue: Vec<BrokerRevenue> = by_broker
        .into_iter()
        .map(|(broker_id, broker_trips)| {
            let total_trips: usize = broker_trips.len();
            let total_revenue: f64 = broker_trips.iter().map(|t| t.broker_payment).sum();
            let broker_name: String = broker_trips
                .last()
                .map(|t| t.broker_name.clone())
                .unwrap_or_default();

            BrokerRevenue {
                broker_id: broker_id.clone(),
                broker_name,
                total_trips,
                total_revenue,
                average_revenue: mean(total_revenue, total_trips),
            }
        })
        .collect();

    revenue.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    revenue
}
