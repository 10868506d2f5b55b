//! Report assembly and rendering
//!
//! Builds the per-file report from the analyzer's [`Flight`] and the header
//! records, then renders it as the nested tables printed by the CLI.

use crate::analysis::FlightAnalyzer;
use crate::conversion::{format_duration, TimeDisplay};
use crate::parser::header::read_pilot_record;
use crate::table::{indent, render_grid};
use crate::types::*;
use log::debug;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling report content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportOptions {
    /// Include per-thermal and per-glide tables for valid flights
    pub detailed: bool,
    pub time_zone: TimeDisplay,
}

/// Name shown in the File column: the bare file name when there is one
fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn summarize_valid(file: String, flight: &Flight, options: &ReportOptions) -> FlightSummaryRow {
    let format_fix = |fix: &Option<Fix>| {
        fix.as_ref()
            .map(|fix| options.time_zone.format(fix.timestamp))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    FlightSummaryRow {
        file,
        status: FlightStatus::Valid,
        takeoff: format_fix(&flight.takeoff_fix),
        landing: format_fix(&flight.landing_fix),
        duration: flight
            .duration_seconds()
            .map(format_duration)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        max_alt: format!("{:.0}", flight.max_altitude()),
        thermals: Some(flight.thermals.len()),
        glides: Some(flight.glides.len()),
        notes: String::new(),
    }
}

fn summarize_invalid(file: String, flight: &Flight) -> FlightSummaryRow {
    FlightSummaryRow {
        file,
        status: FlightStatus::Invalid,
        takeoff: NOT_AVAILABLE.to_string(),
        landing: NOT_AVAILABLE.to_string(),
        duration: NOT_AVAILABLE.to_string(),
        max_alt: NOT_AVAILABLE.to_string(),
        thermals: Some(0),
        glides: Some(0),
        notes: flight.notes_text(),
    }
}

pub fn thermal_row(thermal: &Thermal, time_zone: TimeDisplay) -> ThermalRow {
    ThermalRow {
        start: time_zone.format(thermal.enter_fix.timestamp),
        end: time_zone.format(thermal.exit_fix.timestamp),
        duration: format_duration(thermal.time_change()),
        alt_gain: format!("{:.1}", thermal.alt_change()),
        avg_vario: format!("{:.2}", thermal.vertical_velocity()),
    }
}

pub fn glide_row(glide: &Glide, time_zone: TimeDisplay) -> GlideRow {
    GlideRow {
        start: time_zone.format(glide.enter_fix.timestamp),
        end: time_zone.format(glide.exit_fix.timestamp),
        duration: format_duration(glide.time_change()),
        distance: format!("{:.2}", glide.track_length),
        avg_speed: format!("{:.2}", glide.speed()),
        glide_ratio: format!("{:.2}", glide.glide_ratio()),
    }
}

/// Build the report for one file.
///
/// Never fails: an analyzer error becomes an `Exception` row, and header
/// read problems leave the pilot fields at [`NOT_AVAILABLE`].
pub fn assemble_report<A>(path: &Path, analyzer: &A, options: &ReportOptions) -> FileReport
where
    A: FlightAnalyzer + ?Sized,
{
    let pilot = read_pilot_record(path);

    let flight = match analyzer.analyze(path) {
        Ok(flight) => flight,
        Err(e) => {
            debug!("Analysis of {} failed: {}", path.display(), e);
            return FileReport::Exception {
                row: FlightSummaryRow::exception(path.display().to_string(), e.to_string()),
                pilot,
            };
        }
    };

    let file = display_name(path);
    if !flight.valid {
        return FileReport::Analyzed {
            row: summarize_invalid(file, &flight),
            pilot,
            thermals: None,
            glides: None,
        };
    }

    let row = summarize_valid(file, &flight, options);
    let (thermals, glides) = if options.detailed {
        (
            Some(
                flight
                    .thermals
                    .iter()
                    .map(|t| thermal_row(t, options.time_zone))
                    .collect(),
            ),
            Some(
                flight
                    .glides
                    .iter()
                    .map(|g| glide_row(g, options.time_zone))
                    .collect(),
            ),
        )
    } else {
        (None, None)
    };

    FileReport::Analyzed {
        row,
        pilot,
        thermals,
        glides,
    }
}

fn push_segment_section<S: AsRef<str>>(
    out: &mut String,
    title: &str,
    empty_notice: &str,
    headers: &[&str],
    rows: &[Vec<S>],
) {
    if rows.is_empty() {
        out.push_str(&format!("\n\t{}\n", empty_notice));
        return;
    }
    out.push_str(&format!("\n\t{}:\n", title));
    out.push_str(&indent(&render_grid(headers, rows), "\t\t"));
    out.push('\n');
}

/// Render one file's report as printed text, ending with a blank separator line
pub fn render_report(report: &FileReport) -> String {
    let mut out = String::new();

    match report {
        FileReport::Exception { row, .. } => {
            out.push_str(&render_grid(
                &FlightSummaryRow::EXCEPTION_HEADERS,
                &[row.cells()],
            ));
            out.push('\n');
        }
        FileReport::Analyzed {
            row,
            pilot,
            thermals,
            glides,
        } => {
            out.push_str(&render_grid(&FlightSummaryRow::HEADERS, &[row.cells()]));
            out.push('\n');
            out.push_str(&indent(
                &render_grid(&PilotRecord::HEADERS, &[pilot.cells()]),
                "\t",
            ));
            out.push('\n');

            if let Some(thermals) = thermals {
                let rows: Vec<Vec<String>> = thermals.iter().map(ThermalRow::cells).collect();
                push_segment_section(
                    &mut out,
                    "Thermals",
                    "No thermals found",
                    &ThermalRow::HEADERS,
                    &rows,
                );
            }
            if let Some(glides) = glides {
                let rows: Vec<Vec<String>> = glides.iter().map(GlideRow::cells).collect();
                push_segment_section(
                    &mut out,
                    "Glides",
                    "No glides found",
                    &GlideRow::HEADERS,
                    &rows,
                );
            }
        }
    }

    out.push('\n');
    out
}
