//! # Output record shapes for linked close approaches
//!
//! Two independent shapes are produced from one linked [`CloseApproach`]:
//!
//! - [`CloseApproachJson`]: the structured (nested) form, with native floats
//!   and booleans and a nested [`NeoJson`] object.
//! - [`CloseApproachCsvRow`]: the flat (tabular) form, with every field
//!   string-encoded for a CSV writer.
//!
//! ## Encoding rules
//! -----------------
//! - `datetime_utc` is the `YYYY-MM-DD HH:MM` rendering, no seconds.
//! - A missing NEO name renders as the empty string in both shapes, never a
//!   `None`-like token.
//! - An unknown diameter stays the numeric NaN in the structured form and
//!   renders as the empty string in the flat form.
//! - The hazard flag is a real boolean in the structured form and exactly
//!   `"True"` or `"False"` in the flat form (never `0`/`1` or `Y`/`N`).
//! - Flat floats use Rust's shortest round-trip rendering, so the textual
//!   value re-parses to the identical `f64`.
//!
//! Both conversions are pure reads of the approach and its resolved NEO.
//! Resolving the link (and rejecting unlinked approaches) is the job of
//! [`NeoDatabase`](crate::database::NeoDatabase).

use serde::Serialize;

use crate::close_approach::CloseApproach;
use crate::neo::NearEarthObject;

/// Nested NEO object of the structured output form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoJson {
    pub designation: String,
    /// Empty string when the NEO is unnamed
    pub name: String,
    /// NaN when the diameter is unknown
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

/// Structured (nested) output record for one linked close approach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseApproachJson {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoJson,
}

/// Flat (tabular) output record for one linked close approach.
///
/// Field order matches
/// [`CLOSE_APPROACH_CSV_HEADER`](crate::constants::CLOSE_APPROACH_CSV_HEADER).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseApproachCsvRow {
    pub datetime_utc: String,
    pub distance_au: String,
    pub velocity_km_s: String,
    pub designation: String,
    pub name: String,
    /// Empty string when the diameter is unknown
    pub diameter_km: String,
    /// Exactly `"True"` or `"False"`
    pub potentially_hazardous: String,
}

impl CloseApproach {
    /// Build the structured (nested) output record from this approach and
    /// its resolved NEO.
    pub fn to_json_record(&self, neo: &NearEarthObject) -> CloseApproachJson {
        CloseApproachJson {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
            neo: NeoJson {
                designation: neo.designation().to_string(),
                name: neo.name.clone().unwrap_or_default(),
                diameter_km: neo.diameter_km(),
                potentially_hazardous: neo.hazardous,
            },
        }
    }

    /// Build the flat (tabular) output record from this approach and its
    /// resolved NEO.
    pub fn to_csv_row(&self, neo: &NearEarthObject) -> CloseApproachCsvRow {
        let diameter = neo.diameter_km();
        CloseApproachCsvRow {
            datetime_utc: self.time_str(),
            distance_au: self.distance.to_string(),
            velocity_km_s: self.velocity.to_string(),
            designation: neo.designation().to_string(),
            name: neo.name.clone().unwrap_or_default(),
            diameter_km: if diameter.is_nan() {
                String::new()
            } else {
                diameter.to_string()
            },
            potentially_hazardous: if neo.hazardous { "True" } else { "False" }.to_string(),
        }
    }
}
