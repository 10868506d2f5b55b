use crate::types::Fix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A climbing, circling segment of the track
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thermal {
    pub enter_fix: Fix,
    pub exit_fix: Fix,
}

impl Thermal {
    pub fn new(enter_fix: Fix, exit_fix: Fix) -> Self {
        Self {
            enter_fix,
            exit_fix,
        }
    }

    /// Time spent in the thermal in seconds
    pub fn time_change(&self) -> i64 {
        self.exit_fix.timestamp - self.enter_fix.timestamp
    }

    /// Altitude gained in metres (negative if the thermal did not work)
    pub fn alt_change(&self) -> f64 {
        self.exit_fix.alt - self.enter_fix.alt
    }

    /// Average climb rate in m/s
    pub fn vertical_velocity(&self) -> f64 {
        let time_change = self.time_change();
        if time_change == 0 {
            return 0.0;
        }
        self.alt_change() / time_change as f64
    }
}

/// A straight segment between thermals
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Glide {
    pub enter_fix: Fix,
    pub exit_fix: Fix,
    /// Distance flown along the track in km
    pub track_length: f64,
}

impl Glide {
    pub fn new(enter_fix: Fix, exit_fix: Fix, track_length: f64) -> Self {
        Self {
            enter_fix,
            exit_fix,
            track_length,
        }
    }

    pub fn time_change(&self) -> i64 {
        self.exit_fix.timestamp - self.enter_fix.timestamp
    }

    pub fn alt_change(&self) -> f64 {
        self.exit_fix.alt - self.enter_fix.alt
    }

    /// Average speed over the track in km/h
    pub fn speed(&self) -> f64 {
        let time_change = self.time_change();
        if time_change == 0 {
            return 0.0;
        }
        self.track_length / (time_change as f64 / 3600.0)
    }

    /// Distance covered per metre of altitude lost; 0 for a level glide
    pub fn glide_ratio(&self) -> f64 {
        let alt_change = self.alt_change();
        if alt_change.abs() < 1e-7 {
            return 0.0;
        }
        self.track_length * 1000.0 / -alt_change
    }
}

/// Result of analyzing one flight log
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flight {
    pub valid: bool,
    /// Explanations collected while analyzing; set when the flight is invalid
    pub notes: Vec<String>,
    pub fixes: Vec<Fix>,
    pub takeoff_fix: Option<Fix>,
    pub landing_fix: Option<Fix>,
    /// Chronological by entry time
    pub thermals: Vec<Thermal>,
    /// Chronological by entry time
    pub glides: Vec<Glide>,
}

impl Flight {
    /// An unusable flight carrying the reasons it was rejected
    pub fn invalid(fixes: Vec<Fix>, notes: Vec<String>) -> Self {
        Self {
            valid: false,
            notes,
            fixes,
            ..Self::default()
        }
    }

    /// Highest altitude over all fixes, 0 when the track is empty
    pub fn max_altitude(&self) -> f64 {
        self.fixes
            .iter()
            .map(|fix| fix.alt)
            .fold(None, |max: Option<f64>, alt| {
                Some(max.map_or(alt, |m| m.max(alt)))
            })
            .unwrap_or(0.0)
    }

    /// Seconds between takeoff and landing, if both were detected
    pub fn duration_seconds(&self) -> Option<i64> {
        match (&self.takeoff_fix, &self.landing_fix) {
            (Some(takeoff), Some(landing)) => Some(landing.timestamp - takeoff.timestamp),
            _ => None,
        }
    }

    pub fn notes_text(&self) -> String {
        self.notes.join("; ")
    }
}
