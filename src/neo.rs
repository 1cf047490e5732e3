//! # Near-Earth object entity
//!
//! A [`NearEarthObject`] holds the identity and physical attributes of a
//! single catalogued body: its primary designation (required, unique), its
//! IAU name (optional), its diameter in kilometers (often unknown), and the
//! potentially-hazardous flag. It also owns the ordered collection of its
//! close approaches, stored as arena indices into the
//! [`NeoDatabase`](crate::database::NeoDatabase).
//!
//! The entity is built once from a raw [`NeoRecord`] by
//! [`NearEarthObject::from_record`], which performs all field coercions. The
//! only mutation after construction is the append performed by the linking
//! pass through `add_approach`.

use std::fmt;

use serde::Deserialize;

use crate::constants::{ApproachIndex, Designation, Kilometer};
use crate::conversion::{
    parse_designation, parse_diameter, parse_hazard_flag, parse_optional_name,
};
use crate::neocad_errors::NeoCadError;

/// Raw keyed record for a single NEO, as read from an SBDB orbital-database
/// CSV export.
///
/// Field names follow the SBDB column names (`pdes`, `name`, `diameter`,
/// `pha`); the loader matches them by header, ignoring every other column.
/// All values are kept as text here: coercion happens in the entity factory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoRecord {
    /// Primary designation
    #[serde(default)]
    pub pdes: String,
    /// IAU name, when the object has one
    #[serde(default)]
    pub name: Option<String>,
    /// Diameter in kilometers, text form
    #[serde(default)]
    pub diameter: Option<String>,
    /// Potentially-hazardous-asteroid flag (`"Y"`/`"N"`)
    #[serde(default)]
    pub pha: Option<String>,
}

/// A near-Earth object.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: Designation,
    /// IAU name; `None` when the object is unnamed (never the empty string)
    pub name: Option<String>,
    /// Diameter in kilometers. `Some(NaN)` when unknown; `None` is the
    /// degraded state produced by an unparseable source value.
    pub diameter: Option<Kilometer>,
    /// Potentially-hazardous flag
    pub hazardous: bool,
    approaches: Vec<ApproachIndex>,
}

impl NearEarthObject {
    /// Create a new NEO from already-coerced values.
    ///
    /// Arguments
    /// ---------
    /// * `designation`: primary designation, must be non-empty
    /// * `name`: optional IAU name
    /// * `diameter`: diameter in kilometers (see field docs for the sentinel states)
    /// * `hazardous`: potentially-hazardous flag
    ///
    /// Return
    /// ------
    /// * a new [`NearEarthObject`] with an empty approach collection, or
    ///   [`NeoCadError::MissingDesignation`] when the designation is empty
    pub fn new(
        designation: &str,
        name: Option<String>,
        diameter: Option<Kilometer>,
        hazardous: bool,
    ) -> Result<Self, NeoCadError> {
        Ok(NearEarthObject {
            designation: parse_designation(designation)?,
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        })
    }

    /// Build a NEO from a raw [`NeoRecord`], applying all field coercions.
    ///
    /// Missing name → `None`; missing or empty diameter → `NaN`;
    /// unparseable diameter → degraded `None` state (swallowed, not raised);
    /// hazard flag true iff the text uppercases to `"Y"`.
    pub fn from_record(record: &NeoRecord) -> Result<Self, NeoCadError> {
        Self::new(
            &record.pdes,
            parse_optional_name(record.name.as_deref()),
            parse_diameter(record.diameter.as_deref()),
            parse_hazard_flag(record.pha.as_deref()),
        )
    }

    /// Primary designation. Immutable and never empty after construction.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Diameter in kilometers, with the degraded parse-failure state
    /// collapsed to NaN for consumers.
    pub fn diameter_km(&self) -> Kilometer {
        self.diameter.unwrap_or(f64::NAN)
    }

    /// Display form combining designation and optional name:
    /// `"433 (Eros)"` when named, `"433"` otherwise.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Indices of this NEO's close approaches, in linking append order.
    pub fn approaches(&self) -> &[ApproachIndex] {
        &self.approaches
    }

    /// Append one close approach. Called by the linking pass only.
    pub(crate) fn add_approach(&mut self, approach: ApproachIndex) {
        self.approaches.push(approach);
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard_text = if self.hazardous { "is" } else { "is not" };
        write!(
            f,
            "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
            self.fullname(),
            self.diameter_km(),
            hazard_text
        )
    }
}
