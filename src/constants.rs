//! # Constants and type definitions for neocad
//!
//! This module centralizes the **common type definitions** used throughout the
//! `neocad` library: unit aliases for the physical quantities carried by the
//! catalog, identifier aliases, and the index types used by the arena storage
//! in [`NeoDatabase`](crate::database::NeoDatabase).
//!
//! ## Overview
//!
//! - Unit aliases (astronomical units, kilometers, kilometers per second)
//! - The `Designation` identifier type
//! - Arena index aliases for NEOs and close approaches
//! - The flat (CSV) output header
//!
//! These definitions are used by all main modules, including the entity
//! types, the linking pass, and the serialization layer.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Velocity in kilometers per second
pub type KilometerPerSec = f64;

/// Primary designation of a small solar-system body (e.g. `"433"` or `"2010 PK9"`)
pub type Designation = String;

// -------------------------------------------------------------------------------------------------
// Arena indices
// -------------------------------------------------------------------------------------------------

/// Index of a [`NearEarthObject`](crate::neo::NearEarthObject) inside a
/// [`NeoDatabase`](crate::database::NeoDatabase) arena.
///
/// Close approaches keep this lightweight key instead of a shared pointer to
/// their NEO, so the NEO → approaches → NEO association cycle never becomes
/// an ownership cycle.
pub type NeoIndex = u32;

/// Index of a [`CloseApproach`](crate::close_approach::CloseApproach) inside a
/// [`NeoDatabase`](crate::database::NeoDatabase) arena.
pub type ApproachIndex = u32;

// -------------------------------------------------------------------------------------------------
// Output shapes
// -------------------------------------------------------------------------------------------------

/// Header row of the flat (tabular) close-approach output.
///
/// Field order matches
/// [`CloseApproachCsvRow`](crate::serialize::CloseApproachCsvRow).
pub const CLOSE_APPROACH_CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];
