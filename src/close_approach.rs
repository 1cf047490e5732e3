//! # Close-approach entity
//!
//! A [`CloseApproach`] records a single pass of an NEO near Earth: the
//! approach instant (UTC, minute resolution), the nominal approach distance
//! in astronomical units, and the relative velocity in kilometers per second.
//!
//! The owning NEO is captured as a raw designation at construction time.
//! The linking pass of [`NeoDatabase`](crate::database::NeoDatabase) later
//! resolves it to a [`NeoIndex`]; until then the approach is unlinked, which
//! is a valid state since the two source streams are not guaranteed
//! consistent.

use std::fmt;

use hifitime::Epoch;

use crate::constants::{AstronomicalUnit, Designation, KilometerPerSec, NeoIndex};
use crate::conversion::{parse_designation, parse_float_field};
use crate::neocad_errors::NeoCadError;
use crate::time::{cd_to_epoch, epoch_to_str};

/// Raw record for one close approach, extracted from a positional row of the
/// SBDB close-approach API `data` array.
///
/// Field names follow the API field list: `des` (designation) is position 0,
/// `cd` (calendar date text) position 3, `dist` (nominal distance, au)
/// position 4 and `v_rel` (relative velocity, km/s) position 7. All other
/// positions are ignored. Values are kept as text here: coercion happens in
/// the entity factory.
#[derive(Debug, Clone)]
pub struct ApproachRecord {
    pub des: String,
    pub cd: String,
    pub dist: String,
    pub v_rel: String,
}

impl ApproachRecord {
    /// Build a record from a raw positional row.
    ///
    /// Arguments
    /// ---------
    /// * `row`: one entry of the `data` array; cells may be null
    ///
    /// Return
    /// ------
    /// * the typed record, or [`NeoCadError::MissingField`] when the row is
    ///   too short or a required cell is null
    pub fn from_row(row: &[Option<String>]) -> Result<Self, NeoCadError> {
        let cell = |position: usize| {
            row.get(position)
                .and_then(|value| value.clone())
                .ok_or(NeoCadError::MissingField(position))
        };

        Ok(ApproachRecord {
            des: cell(0)?,
            cd: cell(3)?,
            dist: cell(4)?,
            v_rel: cell(7)?,
        })
    }
}

/// A close approach to Earth by an NEO.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    designation: Designation,
    /// Approach instant (UTC scale, minute resolution)
    pub time: Epoch,
    /// Nominal approach distance in astronomical units
    pub distance: AstronomicalUnit,
    /// Relative approach velocity in kilometers per second
    pub velocity: KilometerPerSec,
    neo: Option<NeoIndex>,
}

impl CloseApproach {
    /// Create a new close approach from already-coerced values.
    ///
    /// The approach starts unlinked; the linking pass assigns the NEO index
    /// exactly once.
    ///
    /// Arguments
    /// ---------
    /// * `designation`: owning NEO's designation, must be non-empty
    /// * `time`: approach instant
    /// * `distance`: nominal distance in astronomical units
    /// * `velocity`: relative velocity in kilometers per second
    pub fn new(
        designation: &str,
        time: Epoch,
        distance: AstronomicalUnit,
        velocity: KilometerPerSec,
    ) -> Result<Self, NeoCadError> {
        Ok(CloseApproach {
            designation: parse_designation(designation)?,
            time,
            distance,
            velocity,
            neo: None,
        })
    }

    /// Build a close approach from a raw [`ApproachRecord`].
    ///
    /// Unlike the NEO diameter, the distance and velocity fields are
    /// required: a value that cannot parse is a fatal
    /// [`NeoCadError::UnparseableFloat`] for this record.
    pub fn from_record(record: &ApproachRecord) -> Result<Self, NeoCadError> {
        Self::new(
            &record.des,
            cd_to_epoch(&record.cd)?,
            parse_float_field("dist", &record.dist)?,
            parse_float_field("v_rel", &record.v_rel)?,
        )
    }

    /// Designation of the owning NEO, as captured at construction.
    /// Immutable and never empty.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Arena index of the linked NEO, `None` until the linking pass runs or
    /// when the designation matches no NEO.
    pub fn neo(&self) -> Option<NeoIndex> {
        self.neo
    }

    /// Assign the NEO link. Called exactly once per approach by the linking
    /// pass; the linked NEO's designation equals `self.designation`.
    pub(crate) fn link_to(&mut self, neo: NeoIndex) {
        self.neo = Some(neo);
    }

    /// Approach instant rendered as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        epoch_to_str(self.time)
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, {} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}
