use std::fs::File;
use std::io::BufReader;

use camino::Utf8Path;
use serde::Deserialize;

use crate::close_approach::{ApproachRecord, CloseApproach};
use crate::neocad_errors::NeoCadError;

/// Body of an SBDB close-approach API response.
///
/// Only the `data` array is consumed; `signature`, `count` and the `fields`
/// list are ignored. An empty result set omits `data` entirely, hence the
/// default.
#[derive(Debug, Deserialize)]
struct CadResponse {
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
}

/// Read close approaches from an SBDB close-approach API JSON document.
///
/// Each positional row of the `data` array is lifted into an
/// [`ApproachRecord`] (positions 0, 3, 4 and 7; see
/// [`ApproachRecord::from_row`]) and run through
/// [`CloseApproach::from_record`]. Source order is preserved.
///
/// Arguments
/// ---------
/// * `cad_json`: path to the JSON file
///
/// Return
/// ------
/// * the close approaches in file order, or the first I/O, JSON or coercion
///   error
pub fn load_approaches(cad_json: &Utf8Path) -> Result<Vec<CloseApproach>, NeoCadError> {
    let file = File::open(cad_json)?;
    let response: CadResponse = serde_json::from_reader(BufReader::new(file))?;

    let mut approaches = Vec::with_capacity(response.data.len());
    for row in &response.data {
        let record = ApproachRecord::from_row(row)?;
        approaches.push(CloseApproach::from_record(&record)?);
    }
    Ok(approaches)
}
