//! # Output writers for linked close approaches
//!
//! Inverse of the [`extract`](crate::extract) layer: render a selection of
//! linked close approaches back to the two flat formats. Both writers
//! resolve every link through the database and fail with
//! [`NeoCadError::UnlinkedApproach`] on a dangling approach instead of
//! writing a defaulted record.

use std::fs::File;
use std::io::BufWriter;

use camino::Utf8Path;

use crate::close_approach::CloseApproach;
use crate::constants::CLOSE_APPROACH_CSV_HEADER;
use crate::database::NeoDatabase;
use crate::neocad_errors::NeoCadError;

/// Write close approaches to a CSV file, one row per approach.
///
/// The header row is always written, even for an empty selection.
///
/// Arguments
/// ---------
/// * `db`: the linked database, used to resolve each approach's NEO
/// * `approaches`: the approaches to write, in output order
/// * `out`: path of the CSV file to create (truncated if present)
///
/// Return
/// ------
/// * `Ok(())`, or the first link-resolution, serialization or I/O error
pub fn write_to_csv<'a>(
    db: &NeoDatabase,
    approaches: impl IntoIterator<Item = &'a CloseApproach>,
    out: &Utf8Path,
) -> Result<(), NeoCadError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(out)?;

    writer.write_record(CLOSE_APPROACH_CSV_HEADER)?;
    for approach in approaches {
        writer.serialize(db.csv_row(approach)?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write close approaches to a JSON file as an array of structured records.
///
/// Note
/// ----
/// * `serde_json` renders non-finite floats as `null`, so an unknown
///   diameter appears as `null` in the file even though the in-memory
///   record carries the numeric NaN.
///
/// Arguments
/// ---------
/// * `db`: the linked database, used to resolve each approach's NEO
/// * `approaches`: the approaches to write, in output order
/// * `out`: path of the JSON file to create (truncated if present)
///
/// Return
/// ------
/// * `Ok(())`, or the first link-resolution, serialization or I/O error
pub fn write_to_json<'a>(
    db: &NeoDatabase,
    approaches: impl IntoIterator<Item = &'a CloseApproach>,
    out: &Utf8Path,
) -> Result<(), NeoCadError> {
    let records = approaches
        .into_iter()
        .map(|approach| db.json_record(approach))
        .collect::<Result<Vec<_>, _>>()?;

    let file = File::create(out)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;
    Ok(())
}
