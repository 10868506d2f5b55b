//! Data conversion utilities for flight reporting
//!
//! Contains the time formatting used by every report table and the
//! great-circle helpers used by the built-in analyzer.

use crate::types::NOT_AVAILABLE;
use chrono::{Local, TimeZone, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Format a number of seconds as zero-padded `HH:MM:SS`
///
/// Hours are not wrapped at 24. Negative input is treated as zero.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format epoch seconds as `DD/MM/YYYY HH:MM:SS` in the given time zone
pub fn format_timestamp<Tz>(timestamp: i64, time_zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match time_zone.timestamp_opt(timestamp, 0).single() {
        Some(datetime) => datetime.format(TIMESTAMP_FORMAT).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Time zone used when printing fix timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeDisplay {
    /// The machine's local time zone
    #[default]
    Local,
    Utc,
}

impl TimeDisplay {
    pub fn format(&self, timestamp: i64) -> String {
        match self {
            TimeDisplay::Local => format_timestamp(timestamp, &Local),
            TimeDisplay::Utc => format_timestamp(timestamp, &Utc),
        }
    }
}

/// Great-circle distance between two points in km (haversine)
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing from the first point to the second, in degrees [0, 360)
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lon = (lon2 - lon1).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Signed difference between two bearings, normalized to (-180, 180]
pub fn bearing_change(from: f64, to: f64) -> f64 {
    let change = (to - from).rem_euclid(360.0);
    if change > 180.0 {
        change - 360.0
    } else {
        change
    }
}
