#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single timestamped position sample decoded from an IGC B record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// Seconds since the Unix epoch (UTC)
    pub timestamp: i64,
    pub lat: f64,
    pub lon: f64,
    /// `A` for a 3D fix, `V` for 2D or no GPS data
    pub validity: char,
    pub press_alt: f64,
    pub gnss_alt: f64,
    /// Altitude from whichever source the analyzer selected for this flight
    pub alt: f64,
}

impl Fix {
    pub fn new(timestamp: i64, lat: f64, lon: f64, press_alt: f64, gnss_alt: f64) -> Self {
        Self {
            timestamp,
            lat,
            lon,
            validity: 'A',
            press_alt,
            gnss_alt,
            alt: press_alt,
        }
    }
}
