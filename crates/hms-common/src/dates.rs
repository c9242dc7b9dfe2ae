//! Calendar helpers
//!
//! The backend exchanges dates as `YYYY-MM-DD` strings and appointment
//! times as `HH:MM`. Ages are always whole years and only advance on the
//! birthday itself.

use crate::error::{HmsError, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveTime};

/// Wire format for calendar dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for appointment times
pub const TIME_FORMAT: &str = "%H:%M";

/// Human-readable format used in tables ("Jun 15, 1990")
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Age in whole years of someone born on `birth`, evaluated on `today`.
///
/// Returns 0 when `today` is before `birth`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today < birth {
        return 0;
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

/// Age in whole years as of the local system date
pub fn age_today(birth: NaiveDate) -> u32 {
    age_on(birth, Local::now().date_naive())
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Format a date for display, e.g. `Jun 15, 1990`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| HmsError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parse an `HH:MM` time and return it normalized (zero padded)
pub fn normalize_time(value: &str) -> Result<String> {
    let parsed = NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        HmsError::InvalidTime {
            value: value.to_string(),
        }
    })?;

    Ok(parsed.format(TIME_FORMAT).to_string())
}
