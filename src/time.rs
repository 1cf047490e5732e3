use hifitime::{Epoch, TimeScale};

use crate::neocad_errors::NeoCadError;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_from_abbrev(abbrev: &str) -> Option<u8> {
    MONTH_ABBREV
        .iter()
        .position(|month| month.eq_ignore_ascii_case(abbrev))
        .map(|index| (index + 1) as u8)
}

/// Parse a close-approach date in the compact JPL format to an [`Epoch`].
///
/// The input pattern is `YYYY-Mon-DD HH:MM` with a 3-letter English month
/// abbreviation, e.g. `2015-Jan-01 01:48`. The instant is interpreted in the
/// UTC scale; the source data carries no seconds, so the resulting epoch has
/// seconds and subseconds equal to zero.
///
/// Arguments
/// ---------
/// * `date_str`: a string in the compact `YYYY-Mon-DD HH:MM` format
///
/// Return
/// ------
/// * the corresponding [`Epoch`], or [`NeoCadError::InvalidDateTime`] if the
///   text does not match the pattern or encodes an impossible date
pub fn cd_to_epoch(date_str: &str) -> Result<Epoch, NeoCadError> {
    let invalid = || NeoCadError::InvalidDateTime(date_str.to_string());

    let mut parts = date_str.split_whitespace();
    let (Some(date), Some(hour_minute), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let mut date_parts = date.split('-');
    let (Some(year), Some(month), Some(day), None) = (
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
    ) else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month = month_from_abbrev(month).ok_or_else(invalid)?;
    let day: u8 = day.parse().map_err(|_| invalid())?;

    let mut time_parts = hour_minute.split(':');
    let (Some(hour), Some(minute), None) = (time_parts.next(), time_parts.next(), time_parts.next())
    else {
        return Err(invalid());
    };

    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    let minute: u8 = minute.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Epoch::maybe_from_gregorian(year, month, day, hour, minute, 0, 0, TimeScale::UTC)
        .map_err(|_| invalid())
}

/// Format an [`Epoch`] as `YYYY-MM-DD HH:MM` (UTC scale, no seconds).
///
/// This is the inverse rendering of [`cd_to_epoch`] for serialization and
/// display: the data set is accurate to the minute, so seconds are dropped
/// from the textual form.
pub fn epoch_to_str(epoch: Epoch) -> String {
    let (year, month, day, hour, minute, _, _) = epoch.to_gregorian(TimeScale::UTC);
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")
}
