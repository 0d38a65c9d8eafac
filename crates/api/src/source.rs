// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The trip read collaborator.
//!
//! Persistence mechanics are out of scope; this trait is the seam the
//! dashboard report functions pull trip collections through.

use haul_hub_domain::{DateRange, Trip};

/// Errors surfaced by a trip source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripSourceError {
    /// The underlying data fetch failed.
    FetchFailed {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for TripSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchFailed { message } => write!(f, "Trip fetch failed: {message}"),
        }
    }
}

impl std::error::Error for TripSourceError {}

/// Read access to an owner's trips.
///
/// Implementations scope the returned collection to the owner and, when a
/// range is given, to trips whose scheduled pickup falls inside it.
pub trait TripSource {
    /// Fetches the owner's trips, optionally bounded to a date range.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The owner whose trips to fetch
    /// * `range` - Optional window to bound the collection to
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data fetch fails.
    fn fetch_trips(
        &self,
        owner_id: &str,
        range: Option<&DateRange>,
    ) -> Result<Vec<Trip>, TripSourceError>;
}
