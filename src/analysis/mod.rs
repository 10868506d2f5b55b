//! Flight analysis
//!
//! The report pipeline only talks to the [`FlightAnalyzer`] trait.
//! [`IgcAnalyzer`] is the built-in implementation: it decodes the B records
//! of an IGC file, detects takeoff and landing from ground speed and splits
//! the airborne part of the track into thermals and glides.

pub mod circling;
pub mod takeoff;

use crate::error::Result;
use crate::parser::igc::parse_igc_fixes;
use crate::types::{Fix, Flight};
use log::debug;
use std::path::Path;

pub use circling::*;
pub use takeoff::*;

/// Turns a flight log into a [`Flight`]
pub trait FlightAnalyzer {
    /// Analyze the log at `path`.
    ///
    /// An `Err` means the file could not be analyzed at all. A file that
    /// was read but holds no usable flight comes back as `Ok` with
    /// [`Flight::valid`] unset and an explanation in [`Flight::notes`].
    fn analyze(&self, path: &Path) -> Result<Flight>;
}

/// Tuning thresholds for [`IgcAnalyzer`]
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Fewer fixes than this and the track is rejected outright
    pub min_fixes: usize,
    /// Ground speed (km/h) above which a fix counts as moving
    pub min_gsp_flight: f64,
    /// Shortest moving stretch (s) accepted as a flight
    pub min_time_for_flight: i64,
    /// Longest stationary gap (s) tolerated inside a flight
    pub max_stationary_gap: i64,
    /// Turn rate (deg/s) above which a fix counts as circling
    pub min_bearing_change_circling: f64,
    /// Shortest circling stretch (s) accepted as a thermal
    pub min_time_for_thermal: i64,
    /// Shortest stretch (s) between thermals accepted as a glide
    pub min_time_for_glide: i64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_fixes: 50,
            min_gsp_flight: 15.0,
            min_time_for_flight: 120,
            max_stationary_gap: 60,
            min_bearing_change_circling: 6.0,
            min_time_for_thermal: 60,
            min_time_for_glide: 1,
        }
    }
}

/// Built-in analyzer for IGC files
#[derive(Debug, Clone, Default)]
pub struct IgcAnalyzer {
    pub config: AnalyzerConfig,
}

impl IgcAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze IGC text already held in memory
    pub fn analyze_text(&self, text: &str) -> Result<Flight> {
        let fixes = parse_igc_fixes(text)?;
        Ok(self.analyze_fixes(fixes))
    }

    /// Analyze an already decoded, time-ordered track
    pub fn analyze_fixes(&self, mut fixes: Vec<Fix>) -> Flight {
        let config = &self.config;

        if fixes.len() < config.min_fixes {
            let note = format!(
                "Error: This file has {} fixes, less than the minimum {}.",
                fixes.len(),
                config.min_fixes
            );
            return Flight::invalid(fixes, vec![note]);
        }

        select_altitude_source(&mut fixes);

        let Some(window) = detect_flight_window(&fixes, config) else {
            return Flight::invalid(fixes, vec!["Error: did not detect takeoff.".to_string()]);
        };

        let thermal_spans = find_thermal_spans(&fixes, window, config);
        let glide_spans = find_glide_spans(&fixes, window, &thermal_spans, config);
        debug!(
            "Flight window {}..{}: {} thermals, {} glides",
            window.takeoff,
            window.landing,
            thermal_spans.len(),
            glide_spans.len()
        );

        let thermals = thermal_spans
            .iter()
            .map(|span| span.to_thermal(&fixes))
            .collect();
        let glides = glide_spans
            .iter()
            .map(|span| span.to_glide(&fixes))
            .collect();

        Flight {
            valid: true,
            notes: Vec::new(),
            takeoff_fix: Some(fixes[window.takeoff].clone()),
            landing_fix: Some(fixes[window.landing].clone()),
            thermals,
            glides,
            fixes,
        }
    }
}

impl FlightAnalyzer for IgcAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Flight> {
        // Headers may carry Latin-1 text; B records are always ASCII
        let bytes = std::fs::read(path)?;
        self.analyze_text(&String::from_utf8_lossy(&bytes))
    }
}

/// Use pressure altitude unless the logger has no baro sensor (all zeros)
pub fn select_altitude_source(fixes: &mut [Fix]) {
    let use_gnss = fixes.iter().all(|fix| fix.press_alt == 0.0);
    for fix in fixes.iter_mut() {
        fix.alt = if use_gnss { fix.gnss_alt } else { fix.press_alt };
    }
}
