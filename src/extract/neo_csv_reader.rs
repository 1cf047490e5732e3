use camino::Utf8Path;

use crate::neo::{NearEarthObject, NeoRecord};
use crate::neocad_errors::NeoCadError;

/// Read near-Earth objects from an SBDB orbital-database CSV export.
///
/// The file must carry a header row; each data row is matched to
/// [`NeoRecord`] by column name (`pdes`, `name`, `diameter`, `pha`), every
/// other column is ignored, and the record is run through
/// [`NearEarthObject::from_record`]. Source order is preserved.
///
/// Arguments
/// ---------
/// * `neo_csv`: path to the CSV file
///
/// Return
/// ------
/// * the NEOs in file order, or the first I/O, CSV or coercion error
pub fn load_neos(neo_csv: &Utf8Path) -> Result<Vec<NearEarthObject>, NeoCadError> {
    let mut reader = csv::Reader::from_path(neo_csv)?;

    let mut neos = Vec::new();
    for record in reader.deserialize::<NeoRecord>() {
        neos.push(NearEarthObject::from_record(&record?)?);
    }
    Ok(neos)
}
