// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-month revenue breakdown.

use crate::support::mean;
use haul_hub_domain::Trip;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Revenue figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// The month in `YYYY-MM` form.
    pub month: String,
    /// Trips whose scheduled pickup falls in the month.
    pub total_trips: usize,
    /// Sum of broker payments.
    pub revenue: f64,
    /// Sum of driver payments, lorry owner payments and fees.
    pub expenses: f64,
    /// Revenue minus expenses.
    pub profit: f64,
}

/// Revenue breakdown across a trip collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueAnalytics {
    /// Per-month figures in chronological order.
    pub months: Vec<MonthlyRevenue>,
    /// Sum of revenue across all months.
    pub total_revenue: f64,
    /// Sum of expenses across all months.
    pub total_expenses: f64,
    /// Sum of profit across all months.
    pub total_profit: f64,
    /// Mean revenue per month with at least one trip.
    pub average_monthly_revenue: f64,
}

/// Computes the calendar-month revenue breakdown for a trip collection.
///
/// Trips are bucketed by the `YYYY-MM` of their scheduled pickup.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
#[must_use]
pub fn revenue_analytics(trips: &[Trip]) -> RevenueAnalytics {
    let mut buckets: BTreeMap<String, MonthlyRevenue> = BTreeMap::new();

    for trip in trips {
        let month: String = format!(
            "{:04}-{:02}",
            trip.scheduled_pickup_datetime.year(),
            u8::from(trip.scheduled_pickup_datetime.month())
        );

        let bucket: &mut MonthlyRevenue =
            buckets
                .entry(month.clone())
                .or_insert_with(|| MonthlyRevenue {
                    month,
                    total_trips: 0,
                    revenue: 0.0,
                    expenses: 0.0,
                    profit: 0.0,
                });

        bucket.total_trips += 1;
        bucket.revenue += trip.broker_payment;
        bucket.expenses += trip.total_expenses();
        bucket.profit = bucket.revenue - bucket.expenses;
    }

    // BTreeMap iteration gives chronological order for YYYY-MM keys
    let months: Vec<MonthlyRevenue> = buckets.into_values().collect();

    let total_revenue: f64 = months.iter().map(|m| m.revenue).sum();
    let total_expenses: f64 = months.iter().map(|m| m.expenses).sum();

    RevenueAnalytics {
        total_revenue,
        total_expenses,
        total_profit: total_revenue - total_expenses,
        average_monthly_revenue: mean(total_revenue, months.len()),
        months,
    }
}
