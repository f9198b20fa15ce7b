use hifitime::{Epoch, TimeScale};
use std::str::FromStr;

use crate::constants::Days;
use crate::orrery_errors::OrreryError;

/// Transformation from a calendar date in the format MM/DD/YYYY to a UTC-midnight epoch
///
/// The wall-clock components of the string are taken as UTC wall-clock, so the
/// parsed instant is independent of the local timezone.
///
/// Argument
/// --------
/// * `date`: a date string in the format MM/DD/YYYY (single-digit month and day
///   are accepted, e.g. "1/1/2000")
///
/// Return
/// ------
/// * the corresponding [`Epoch`] at 00:00:00 UTC. Malformed strings yield
///   [`OrreryError::InvalidDateFormat`]; out-of-range calendar components
///   (month 13, February 30) surface the underlying hifitime error as-is.
pub fn parse_date(date: &str) -> Result<Epoch, OrreryError> {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return Err(OrreryError::InvalidDateFormat(date.to_string()));
    }

    let invalid = || OrreryError::InvalidDateFormat(date.to_string());

    // Extract values
    let month = u8::from_str(parts[0]).map_err(|_| invalid())?;
    let day = u8::from_str(parts[1]).map_err(|_| invalid())?;
    let year = i32::from_str(parts[2]).map_err(|_| invalid())?;

    let epoch = Epoch::maybe_from_gregorian(year, month, day, 0, 0, 0, 0, TimeScale::UTC)?;

    Ok(epoch)
}

/// Signed difference between two calendar dates, in fractional days
///
/// Argument
/// --------
/// * `start`: start date in the format MM/DD/YYYY
/// * `end`: end date in the format MM/DD/YYYY
///
/// Return
/// ------
/// * `end - start` expressed in days. Negative when `start` is chronologically
///   after `end`; callers must not assume non-negativity.
pub fn days_between(start: &str, end: &str) -> Result<Days, OrreryError> {
    Ok(parse_date(end)?.to_mjd_utc_days() - parse_date(start)?.to_mjd_utc_days())
}
