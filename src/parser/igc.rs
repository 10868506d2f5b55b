use crate::error::{AnalysisError, Result};
use crate::parser::helpers::*;
use crate::types::Fix;
use chrono::{NaiveDate, TimeZone, Utc};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest B record: `B` + time(6) + lat(8) + lon(9) + validity(1) + two altitudes(10)
const MIN_B_RECORD_LEN: usize = 35;

const HALF_DAY_SECONDS: i64 = 43_200;

/// `HFDTEDDMMYY` or `HFDTEDATE:DDMMYY,NN`
static FLIGHT_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^HFDTE(?:DATE)?:?\s*(\d{2})(\d{2})(\d{2})").expect("Invalid FLIGHT_DATE_REGEX")
});

/// Find the flight date in the `HFDTE` header, as epoch seconds at UTC midnight.
///
/// Accepts both the legacy `HFDTEDDMMYY` form and the newer
/// `HFDTEDATE:DDMMYY,NN` form.
pub fn parse_flight_date(text: &str) -> Result<Option<i64>> {
    for line in text.lines() {
        let Some(caps) = FLIGHT_DATE_REGEX.captures(line.trim()) else {
            continue;
        };
        let field = |i: usize| caps[i].parse::<u32>().unwrap_or(0);
        let (day, month) = (field(1), field(2));
        let year = expand_two_digit_year(field(3) as i32);

        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                AnalysisError::Parse(format!("Invalid HFDTE date: {}", line.trim()))
            })?;
        return Ok(Some(Utc.from_utc_datetime(&midnight).timestamp()));
    }

    Ok(None)
}

/// Decode one B record relative to the flight date; `None` if malformed
pub fn parse_b_record(line: &str, day_start: i64) -> Option<Fix> {
    if !line.starts_with('B') || line.len() < MIN_B_RECORD_LEN {
        return None;
    }

    let time_of_day = parse_time_of_day(line.get(1..7)?)?;
    let lat = parse_latitude(line.get(7..15)?)?;
    let lon = parse_longitude(line.get(15..24)?)?;
    let validity = line.get(24..25)?.chars().next()?;
    if validity != 'A' && validity != 'V' {
        return None;
    }
    let press_alt = parse_altitude(line.get(25..30)?)?;
    let gnss_alt = parse_altitude(line.get(30..35)?)?;

    Some(Fix {
        timestamp: day_start + time_of_day,
        lat,
        lon,
        validity,
        press_alt,
        gnss_alt,
        alt: press_alt,
    })
}

/// Parse all fixes from IGC text in file order.
///
/// Malformed B records are skipped. A time of day that jumps back by more
/// than half a day is a midnight crossing and moves later fixes to the next day.
pub fn parse_igc_fixes(text: &str) -> Result<Vec<Fix>> {
    let date = parse_flight_date(text)?.ok_or(AnalysisError::MissingDate)?;

    let mut fixes: Vec<Fix> = Vec::new();
    let mut day_start = date;
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if !line.starts_with('B') {
            continue;
        }

        let Some(mut fix) = parse_b_record(line, day_start) else {
            skipped += 1;
            continue;
        };

        if let Some(previous) = fixes.last() {
            if fix.timestamp + HALF_DAY_SECONDS < previous.timestamp {
                day_start += 86_400;
                fix.timestamp += 86_400;
            }
        }
        fixes.push(fix);
    }

    if skipped > 0 {
        debug!("Skipped {} malformed B records", skipped);
    }

    Ok(fixes)
}
