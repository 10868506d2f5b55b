//! Thermal and glide segmentation from the turn rate of the track

use crate::analysis::{AnalyzerConfig, FlightWindow};
use crate::conversion::{bearing_change, haversine_km, initial_bearing};
use crate::types::{Fix, Glide, Thermal};

/// Inclusive range of fix indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSpan {
    pub start: usize,
    pub end: usize,
}

impl SegmentSpan {
    pub fn duration(&self, fixes: &[Fix]) -> i64 {
        fixes[self.end].timestamp - fixes[self.start].timestamp
    }

    pub fn to_thermal(&self, fixes: &[Fix]) -> Thermal {
        Thermal::new(fixes[self.start].clone(), fixes[self.end].clone())
    }

    pub fn to_glide(&self, fixes: &[Fix]) -> Glide {
        Glide::new(
            fixes[self.start].clone(),
            fixes[self.end].clone(),
            track_length(&fixes[self.start..=self.end]),
        )
    }
}

/// Sum of leg distances in km
pub fn track_length(fixes: &[Fix]) -> f64 {
    fixes
        .windows(2)
        .map(|pair| haversine_km(pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon))
        .sum()
}

/// Per-fix flag: was the glider turning at least `min_rate` deg/s into this fix
pub fn circling_mask(fixes: &[Fix], min_rate: f64) -> Vec<bool> {
    let mut mask = vec![false; fixes.len()];
    let mut previous_bearing: Option<f64> = None;

    for i in 1..fixes.len() {
        let (from, to) = (&fixes[i - 1], &fixes[i]);
        let dt = to.timestamp - from.timestamp;
        if dt <= 0 {
            continue;
        }

        let bearing = initial_bearing(from.lat, from.lon, to.lat, to.lon);
        if let Some(previous) = previous_bearing {
            let rate = bearing_change(previous, bearing) / dt as f64;
            mask[i] = rate.abs() >= min_rate;
        }
        previous_bearing = Some(bearing);
    }

    mask
}

/// Circling stretches inside the flight window lasting at least `min_time_for_thermal`
pub fn find_thermal_spans(
    fixes: &[Fix],
    window: FlightWindow,
    config: &AnalyzerConfig,
) -> Vec<SegmentSpan> {
    let mask = circling_mask(fixes, config.min_bearing_change_circling);
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for i in window.takeoff..=window.landing {
        match (mask[i], start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push(SegmentSpan { start: s, end: i - 1 });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(SegmentSpan {
            start: s,
            end: window.landing,
        });
    }

    spans.retain(|span| span.duration(fixes) >= config.min_time_for_thermal);
    spans
}

/// Stretches between takeoff, each thermal and landing lasting at least `min_time_for_glide`
pub fn find_glide_spans(
    fixes: &[Fix],
    window: FlightWindow,
    thermals: &[SegmentSpan],
    config: &AnalyzerConfig,
) -> Vec<SegmentSpan> {
    let mut spans = Vec::new();
    let mut cursor = window.takeoff;

    for thermal in thermals {
        if thermal.start > cursor {
            spans.push(SegmentSpan {
                start: cursor,
                end: thermal.start,
            });
        }
        cursor = thermal.end;
    }
    if window.landing > cursor {
        spans.push(SegmentSpan {
            start: cursor,
            end: window.landing,
        });
    }

    spans.retain(|span| span.duration(fixes) >= config.min_time_for_glide);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_tracks::TrackBuilder;

    #[test]
    fn test_straight_track_never_circles() {
        let fixes = TrackBuilder::new(0, 1000.0).straight(100, 20.0, 0.0).build();
        assert!(circling_mask(&fixes, 6.0).iter().all(|c| !c));
    }

    #[test]
    fn test_steady_turn_is_circling() {
        let fixes = TrackBuilder::new(0, 1000.0)
            .straight(10, 20.0, 0.0)
            .circle(30, 20.0, 0.0, 15.0)
            .build();
        let mask = circling_mask(&fixes, 6.0);

        assert!(mask[..=10].iter().all(|c| !c));
        assert!(mask[11..].iter().all(|c| *c));
    }

    #[test]
    fn test_short_turn_is_not_a_thermal() {
        let fixes = TrackBuilder::new(0, 1000.0)
            .straight(100, 20.0, 0.0)
            .circle(30, 20.0, 1.0, 15.0)
            .straight(100, 20.0, 0.0)
            .build();
        let window = FlightWindow {
            takeoff: 0,
            landing: fixes.len() - 1,
        };
        let config = AnalyzerConfig::default();

        let thermals = find_thermal_spans(&fixes, window, &config);
        assert!(thermals.is_empty());

        let glides = find_glide_spans(&fixes, window, &thermals, &config);
        assert_eq!(glides, vec![SegmentSpan { start: 0, end: fixes.len() - 1 }]);
    }

    #[test]
    fn test_glide_track_length() {
        // 100 s at 20 m/s
        let fixes = TrackBuilder::new(0, 1000.0).straight(100, 20.0, -1.0).build();
        let span = SegmentSpan { start: 0, end: 100 };
        let glide = span.to_glide(&fixes);

        assert!((glide.track_length - 2.0).abs() < 0.001);
        assert!((glide.speed() - 72.0).abs() < 0.05);
        assert!((glide.glide_ratio() - 20.0).abs() < 0.05);
    }
}
