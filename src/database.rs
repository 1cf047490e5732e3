//! # NeoDatabase: arena storage and the linking pass
//!
//! This module defines the [`NeoDatabase`] struct, the central façade that
//! wires together:
//!
//! 1. **Arena storage** — NEOs and close approaches each live in an
//!    indexable container, in input order.
//! 2. **Designation index** — a map from primary designation to [`NeoIndex`]
//!    for listing and lookup.
//! 3. **The linking pass** — resolves each approach's captured designation
//!    into a NEO index and appends the approach to that NEO's collection.
//! 4. **Serialization entry points** — resolve the link and hand the pair to
//!    the pure converters of [`serialize`](crate::serialize).
//!
//! ## Linking semantics
//! -----------------
//! All NEOs are indexed before any lookup begins. Approaches are then
//! processed in input order, so both the per-NEO approach collections and
//! the global approach arena preserve the relative order of the source
//! stream. An approach whose designation matches no NEO stays unlinked: the
//! two source streams are not guaranteed consistent, so a dangling reference
//! is a valid state, not an error. Serializing such an approach *is* an
//! error ([`NeoCadError::UnlinkedApproach`]); defaults are never substituted.
//!
//! Once built, a database supports no update or delete: construction is the
//! only write.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use camino::Utf8Path;
//! use neocad::database::NeoDatabase;
//!
//! # fn demo() -> Result<(), neocad::neocad_errors::NeoCadError> {
//! let db = NeoDatabase::from_files(
//!     Utf8Path::new("data/neos.csv"),
//!     Utf8Path::new("data/cad.json"),
//! )?;
//!
//! let eros = db.get_neo_by_designation("433").unwrap();
//! for approach in db.approaches_of(eros) {
//!     println!("{approach}");
//! }
//! # Ok(()) }
//! ```

use std::collections::HashMap;

use camino::Utf8Path;

use crate::close_approach::CloseApproach;
use crate::constants::{ApproachIndex, Designation, NeoIndex};
use crate::extract;
use crate::neo::NearEarthObject;
use crate::neocad_errors::NeoCadError;
use crate::serialize::{CloseApproachCsvRow, CloseApproachJson};

#[derive(Debug, Clone)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    designation_index: HashMap<Designation, NeoIndex>,
}

impl NeoDatabase {
    /// Build a database from constructed entities and run the linking pass.
    ///
    /// NEOs are indexed by designation first; each approach is then resolved
    /// in input order and, on a hit, linked and appended to its NEO's
    /// collection. Approaches with a dangling designation are kept unlinked.
    ///
    /// Arguments
    /// ---------
    /// * `neos`: NEO entities, in source order
    /// * `approaches`: close-approach entities, in source order
    ///
    /// Return
    /// ------
    /// * the linked [`NeoDatabase`]
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let designation_index: HashMap<Designation, NeoIndex> = neos
            .iter()
            .enumerate()
            .map(|(index, neo)| (neo.designation().to_string(), index as NeoIndex))
            .collect();

        for (approach_index, approach) in approaches.iter_mut().enumerate() {
            if let Some(&neo_index) = designation_index.get(approach.designation()) {
                approach.link_to(neo_index);
                neos[neo_index as usize].add_approach(approach_index as ApproachIndex);
            }
        }

        NeoDatabase {
            neos,
            approaches,
            designation_index,
        }
    }

    /// Load both source files and build the linked database.
    ///
    /// Arguments
    /// ---------
    /// * `neo_csv`: path to the NEO orbital-database CSV export
    /// * `cad_json`: path to the close-approach API JSON document
    ///
    /// Return
    /// ------
    /// * the linked database, or the first loading/coercion error
    pub fn from_files(neo_csv: &Utf8Path, cad_json: &Utf8Path) -> Result<Self, NeoCadError> {
        Ok(Self::new(
            extract::load_neos(neo_csv)?,
            extract::load_approaches(cad_json)?,
        ))
    }

    /// All NEOs, in source order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in source order.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolve a NEO from its arena index.
    pub fn neo(&self, index: NeoIndex) -> &NearEarthObject {
        &self.neos[index as usize]
    }

    /// Resolve a close approach from its arena index.
    pub fn approach(&self, index: ApproachIndex) -> &CloseApproach {
        &self.approaches[index as usize]
    }

    /// Look up a NEO by primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.designation_index
            .get(designation)
            .map(|&index| self.neo(index))
    }

    /// Resolve the NEO linked to an approach, if the linking pass found one.
    pub fn neo_of(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo().map(|index| self.neo(index))
    }

    /// Iterate over a NEO's close approaches, in linking append order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> {
        neo.approaches().iter().map(|&index| self.approach(index))
    }

    /// Structured (nested) output record for a linked approach.
    ///
    /// Return
    /// ------
    /// * the record, or [`NeoCadError::UnlinkedApproach`] when the approach
    ///   has no resolved NEO
    pub fn json_record(&self, approach: &CloseApproach) -> Result<CloseApproachJson, NeoCadError> {
        let neo = self
            .neo_of(approach)
            .ok_or_else(|| NeoCadError::UnlinkedApproach(approach.designation().to_string()))?;
        Ok(approach.to_json_record(neo))
    }

    /// Flat (tabular) output record for a linked approach.
    ///
    /// Return
    /// ------
    /// * the record, or [`NeoCadError::UnlinkedApproach`] when the approach
    ///   has no resolved NEO
    pub fn csv_row(&self, approach: &CloseApproach) -> Result<CloseApproachCsvRow, NeoCadError> {
        let neo = self
            .neo_of(approach)
            .ok_or_else(|| NeoCadError::UnlinkedApproach(approach.designation().to_string()))?;
        Ok(approach.to_csv_row(neo))
    }
}

#[cfg(test)]
mod database_test {
    use super::*;
    use crate::close_approach::ApproachRecord;
    use crate::neo::NeoRecord;

    fn neo(pdes: &str, name: Option<&str>) -> NearEarthObject {
        NearEarthObject::from_record(&NeoRecord {
            pdes: pdes.to_string(),
            name: name.map(str::to_string),
            diameter: None,
            pha: None,
        })
        .unwrap()
    }

    fn approach(des: &str, cd: &str) -> CloseApproach {
        CloseApproach::from_record(&ApproachRecord {
            des: des.to_string(),
            cd: cd.to_string(),
            dist: "0.4".to_string(),
            v_rel: "3.7".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_linking() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros"))],
            vec![approach("433", "2025-Nov-30 02:18")],
        );

        let eros = db.get_neo_by_designation("433").unwrap();
        assert_eq!(eros.name.as_deref(), Some("Eros"));
        assert_eq!(eros.approaches().len(), 1);

        let linked = &db.approaches()[0];
        let linked_neo = db.neo_of(linked).unwrap();
        assert_eq!(linked_neo.designation(), linked.designation());
        assert_eq!(linked_neo.name.as_deref(), Some("Eros"));

        let collected: Vec<_> = db.approaches_of(eros).collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].time_str(), "2025-11-30 02:18");
    }

    #[test]
    fn test_approach_order_preserved() {
        let db = NeoDatabase::new(
            vec![neo("1862", Some("Apollo")), neo("433", Some("Eros"))],
            vec![
                approach("433", "1902-Jan-22 10:50"),
                approach("1862", "2022-Jan-24 22:00"),
                approach("433", "2025-Nov-30 02:18"),
            ],
        );

        let eros = db.get_neo_by_designation("433").unwrap();
        let times: Vec<String> = db.approaches_of(eros).map(|a| a.time_str()).collect();
        assert_eq!(times, ["1902-01-22 10:50", "2025-11-30 02:18"]);

        // Listing order is the source order, not the lookup order
        let listed: Vec<&str> = db.neos().iter().map(|n| n.designation()).collect();
        assert_eq!(listed, ["1862", "433"]);
    }

    #[test]
    fn test_unresolved_link() {
        let db = NeoDatabase::new(
            vec![neo("433", Some("Eros"))],
            vec![approach("99942", "2029-Apr-13 21:46")],
        );

        let dangling = &db.approaches()[0];
        assert_eq!(dangling.neo(), None);
        assert!(db.neo_of(dangling).is_none());
        assert!(db
            .get_neo_by_designation("433")
            .unwrap()
            .approaches()
            .is_empty());

        assert_eq!(
            db.json_record(dangling).unwrap_err(),
            NeoCadError::UnlinkedApproach("99942".to_string())
        );
        assert_eq!(
            db.csv_row(dangling).unwrap_err(),
            NeoCadError::UnlinkedApproach("99942".to_string())
        );
    }

    #[test]
    fn test_neo_without_approaches() {
        let db = NeoDatabase::new(vec![neo("1036", Some("Ganymed"))], Vec::new());
        let ganymed = db.get_neo_by_designation("1036").unwrap();
        assert!(db.approaches_of(ganymed).next().is_none());
    }
}
