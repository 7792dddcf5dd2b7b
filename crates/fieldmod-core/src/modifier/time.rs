//! Timestamp layouts for `FORMAT` on the `time` attribute
//!
//! Each layout is fixed: the text is checked field by field against the layout
//! before chrono validates the values, so padding and separators are strict.
//!
//! Copyright (c) 2025 Fieldmod Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use std::ops::RangeInclusive;

const ISO_LAYOUT: &str = "2006-01-02T15:04:05Z07:00";
const UNIX_LAYOUT: &str = "Mon Jan _2 15:04:05 MST 2006";
const SHORT_LAYOUT: &str = "Jan 02 2006 15 04";

/// Unix date fields after the weekday, with the zone name swapped for a numeric offset
const UNIX_DATE_FORMAT: &str = "%b %e %H:%M:%S %z %Y";

const SHORT_FORMAT: &str = "%b %d %Y %H %M";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Layout selected by the first modifier argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// RFC 3339, e.g. `2006-01-02T15:04:05Z07:00`
    Iso,
    /// `date(1)` output, e.g. `Mon Jan  2 15:04:05 MST 2006`
    ///
    /// This is a textual layout, not epoch seconds.
    UnixDate,
    /// `Jan 02 2006 15 04`, read as UTC
    Short,
}

impl TimeLayout {
    /// Pick a layout from an argument, ignoring ASCII case
    ///
    /// Anything other than `ISO` or `UNIX`, including no argument, selects [`TimeLayout::Short`].
    pub fn select(arg: Option<&str>) -> Self {
        match arg {
            Some(a) if a.eq_ignore_ascii_case("iso") => TimeLayout::Iso,
            Some(a) if a.eq_ignore_ascii_case("unix") => TimeLayout::UnixDate,
            _ => TimeLayout::Short,
        }
    }

    /// Reference rendering of the layout, used in error messages
    pub fn layout(&self) -> &'static str {
        match self {
            TimeLayout::Iso => ISO_LAYOUT,
            TimeLayout::UnixDate => UNIX_LAYOUT,
            TimeLayout::Short => SHORT_LAYOUT,
        }
    }

    /// Parse `input` under this layout
    pub fn parse(&self, input: &str) -> Result<DateTime<FixedOffset>> {
        match self {
            TimeLayout::Iso => parse_iso(input),
            TimeLayout::UnixDate => parse_unix_date(input),
            TimeLayout::Short => parse_short(input),
        }
    }
}

/// RFC 3339 with the `T` date/time separator required
fn parse_iso(input: &str) -> Result<DateTime<FixedOffset>> {
    if input.as_bytes().get(10) != Some(&b'T') {
        return Err(Error::time_layout(input, ISO_LAYOUT));
    }
    Ok(DateTime::parse_from_rfc3339(input)?)
}

/// Parse `date(1)` style output
///
/// The weekday is checked for spelling only and does not have to agree with the
/// date. Zone abbreviations carry no offset information here, so any alphabetic
/// abbreviation resolves to offset zero; a numeric offset in the zone position
/// is honored.
fn parse_unix_date(input: &str) -> Result<DateTime<FixedOffset>> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    let [weekday, month, day, clock, zone, year] = fields.as_slice() else {
        return Err(Error::time_layout(input, UNIX_LAYOUT));
    };

    let offset = if is_zone_abbreviation(zone) {
        "+0000"
    } else if is_numeric_offset(zone) {
        *zone
    } else {
        return Err(Error::time_layout(input, UNIX_LAYOUT));
    };

    let well_formed = WEEKDAYS.iter().any(|w| w.eq_ignore_ascii_case(weekday))
        && is_alphabetic(month, 3..=3)
        && is_digits(day, 1..=2)
        && is_clock(clock)
        && is_digits(year, 4..=4);
    if !well_formed {
        return Err(Error::time_layout(input, UNIX_LAYOUT));
    }

    let normalized = format!("{} {} {} {} {}", month, day, clock, offset, year);
    Ok(DateTime::parse_from_str(&normalized, UNIX_DATE_FORMAT)?)
}

/// Parse `Jan 02 2006 15 04` with single-space separators
fn parse_short(input: &str) -> Result<DateTime<FixedOffset>> {
    let fields: Vec<&str> = input.split(' ').collect();
    let well_formed = match fields.as_slice() {
        [month, day, year, hour, minute] => {
            is_alphabetic(month, 3..=3)
                && is_digits(day, 2..=2)
                && is_digits(year, 4..=4)
                && is_digits(hour, 1..=2)
                && is_digits(minute, 2..=2)
        }
        _ => false,
    };
    if !well_formed {
        return Err(Error::time_layout(input, SHORT_LAYOUT));
    }

    let naive = NaiveDateTime::parse_from_str(input, SHORT_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive).into())
}

/// `15:04:05`, hour one or two digits
fn is_clock(clock: &str) -> bool {
    match clock.split(':').collect::<Vec<_>>().as_slice() {
        [hour, minute, second] => {
            is_digits(hour, 1..=2) && is_digits(minute, 2..=2) && is_digits(second, 2..=2)
        }
        _ => false,
    }
}

fn is_digits(field: &str, widths: RangeInclusive<usize>) -> bool {
    widths.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphabetic(field: &str, widths: RangeInclusive<usize>) -> bool {
    widths.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_zone_abbreviation(zone: &str) -> bool {
    is_alphabetic(zone, 3..=5)
}

/// `+hhmm` / `-hhmm`
fn is_numeric_offset(zone: &str) -> bool {
    zone.len() == 5 && zone.starts_with(&['+', '-'][..]) && is_digits(&zone[1..], 4..=4)
}
