//! Takeoff and landing detection from ground speed

use crate::analysis::AnalyzerConfig;
use crate::conversion::haversine_km;
use crate::types::Fix;

/// Fix indices of the detected takeoff and landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightWindow {
    pub takeoff: usize,
    pub landing: usize,
}

/// Ground speed in km/h between two fixes; 0 when time does not advance
pub fn ground_speed(from: &Fix, to: &Fix) -> f64 {
    let dt = to.timestamp - from.timestamp;
    if dt <= 0 {
        return 0.0;
    }
    haversine_km(from.lat, from.lon, to.lat, to.lon) / (dt as f64 / 3600.0)
}

/// Per-fix flag: did the glider reach flying speed on the way to this fix
pub fn moving_mask(fixes: &[Fix], min_gsp_flight: f64) -> Vec<bool> {
    let mut mask = vec![false; fixes.len()];
    for i in 1..fixes.len() {
        mask[i] = ground_speed(&fixes[i - 1], &fixes[i]) >= min_gsp_flight;
    }
    mask
}

/// Group moving fixes into runs, bridging stationary gaps shorter than
/// `max_stationary_gap` seconds. Each run is `(first, last)` moving index.
fn moving_runs(fixes: &[Fix], mask: &[bool], max_stationary_gap: i64) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (i, moving) in mask.iter().enumerate() {
        if !moving {
            continue;
        }
        current = match current {
            Some((start, last))
                if fixes[i].timestamp - fixes[last].timestamp < max_stationary_gap =>
            {
                Some((start, i))
            }
            Some(run) => {
                runs.push(run);
                Some((i, i))
            }
            None => Some((i, i)),
        };
    }

    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

/// Find takeoff and landing.
///
/// Takeoff is the start of the first flying run lasting at least
/// `min_time_for_flight`, landing the end of the last one. Returns `None`
/// when no run is long enough.
pub fn detect_flight_window(fixes: &[Fix], config: &AnalyzerConfig) -> Option<FlightWindow> {
    let mask = moving_mask(fixes, config.min_gsp_flight);
    let mut flights = moving_runs(fixes, &mask, config.max_stationary_gap)
        .into_iter()
        .filter(|&(start, end)| {
            fixes[end].timestamp - fixes[start].timestamp >= config.min_time_for_flight
        });

    let first = flights.next()?;
    let last = flights.last().unwrap_or(first);

    Some(FlightWindow {
        takeoff: first.0,
        landing: last.1,
    })
}
