//! Integration tests for the report pipeline
//!
//! Tests file selection, header extraction and report assembly together
//! on IGC files written to a temporary directory:
//! - Missing files are warned about and skipped, never dropped silently
//! - Valid, invalid and undated logs each produce exactly one row
//! - Segment tables only appear in detailed mode

use igc_report::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const HEADER: &str = "AXCT7ec5d6a1d4a6c4b
HFDTEDATE:140723,01
HFPLTPILOTINCHARGE: Jane Doe
HFGTYGLIDERTYPE: Ozone Rush 6
HFFTYFRTYPE:XCTrack,0.9.11
HOSITSite: Annecy Planfait
HFALPALTPRESSURE:ISA
";

/// B record at 45°53.000'N, 7°xx.xxx'E heading due east
fn b_record(second: u32, lon_thousandths: u32, press_alt: i32) -> String {
    let t = 10 * 3600 + second;
    format!(
        "B{:02}{:02}{:02}4553000N007{:05}EA{:05}{:05}",
        t / 3600,
        (t % 3600) / 60,
        t % 60,
        lon_thousandths,
        press_alt,
        press_alt + 40
    )
}

/// Straight glide east at roughly 46 km/h, one fix per second, sinking 1 m/s
fn straight_flight(fixes: u32) -> String {
    let mut text = HEADER.to_string();
    for i in 0..fixes {
        text.push_str(&b_record(i, i * 10, 1000 - i as i32));
        text.push('\n');
    }
    text
}

fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

fn utc_options(detailed: bool) -> ReportOptions {
    ReportOptions {
        detailed,
        time_zone: TimeDisplay::Utc,
    }
}

fn path_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

#[test]
fn test_missing_file_is_warned_and_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let a = write_file(temp_dir.path(), "a.igc", straight_flight(200));
    let missing = temp_dir.path().join("missing.igc");

    let selection = select_files(&[path_arg(&a), path_arg(&missing)]).unwrap();
    assert_eq!(selection.existing, vec![a]);

    let warning = selection.missing_warning().unwrap();
    assert!(warning.contains("missing.igc"));
    assert!(!warning.contains("a.igc"));

    let analyzer = IgcAnalyzer::new();
    let reports: Vec<FileReport> = selection
        .existing
        .iter()
        .map(|path| assemble_report(path, &analyzer, &utc_options(false)))
        .collect();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].summary().file, "a.igc");
}

#[test]
fn test_valid_flight_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "valid.igc", straight_flight(200));

    let report = assemble_report(&path, &IgcAnalyzer::new(), &utc_options(false));
    let row = report.summary();

    assert_eq!(row.status, FlightStatus::Valid);
    assert_eq!(row.takeoff, "14/07/2023 10:00:01");
    assert_eq!(row.landing, "14/07/2023 10:03:19");
    assert_eq!(row.duration, "00:03:18");
    assert_eq!(row.max_alt, "1000");
    assert_eq!(row.thermals, Some(0));
    assert_eq!(row.glides, Some(1));

    let pilot = report.pilot();
    assert_eq!(pilot.pilot, "Jane Doe");
    assert_eq!(pilot.glider, "Ozone Rush 6");
    assert_eq!(pilot.site, "Annecy Planfait");
    assert_eq!(pilot.competition_class, NOT_AVAILABLE);
}

#[test]
fn test_summary_mode_prints_no_segment_tables() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "valid.igc", straight_flight(200));

    let text = render_report(&assemble_report(
        &path,
        &IgcAnalyzer::new(),
        &utc_options(false),
    ));

    assert!(text.contains("| valid.igc"));
    assert!(text.contains("\t| Pilot"));
    assert!(!text.contains("Glides:"));
    assert!(!text.contains("No thermals found"));
}

#[test]
fn test_detailed_mode_without_thermals_prints_notice() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "valid.igc", straight_flight(200));

    let text = render_report(&assemble_report(
        &path,
        &IgcAnalyzer::new(),
        &utc_options(true),
    ));

    assert!(text.contains("\n\tNo thermals found\n"));
    assert!(text.contains("\n\tGlides:\n"));
    assert!(text.contains("\t\t| Start Time"));
    assert!(text.contains("14/07/2023 10:00:01"));
}

#[test]
fn test_short_log_is_invalid() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "short.igc", straight_flight(10));

    let report = assemble_report(&path, &IgcAnalyzer::new(), &utc_options(true));
    let row = report.summary();

    assert_eq!(row.status, FlightStatus::Invalid);
    assert_eq!(row.thermals, Some(0));
    assert_eq!(row.glides, Some(0));
    assert_eq!(row.takeoff, NOT_AVAILABLE);
    assert_eq!(row.max_alt, NOT_AVAILABLE);
    assert_eq!(
        row.notes,
        "Error: This file has 10 fixes, less than the minimum 50."
    );
    // Header extraction is independent of flight validity
    assert_eq!(report.pilot().pilot, "Jane Doe");
}

#[test]
fn test_missing_date_is_an_exception() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let text = straight_flight(100).replace("HFDTEDATE:140723,01\n", "");
    let path = write_file(temp_dir.path(), "nodate.igc", text);

    let report = assemble_report(&path, &IgcAnalyzer::new(), &utc_options(true));
    let row = report.summary();

    assert_eq!(row.status, FlightStatus::Exception);
    assert_eq!(row.file, path.display().to_string());
    assert_eq!(row.notes, "No date record (HFDTE) found in file");
    assert!(row.takeoff.is_empty());
    assert_eq!(row.thermals, None);
}

#[test]
fn test_latin1_header_does_not_lose_the_flight() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let text = straight_flight(200);
    let (head, tail) = text.split_once("Jane Doe").unwrap();
    // Latin-1 e-diaeresis in the pilot name, invalid as UTF-8
    let mut bytes = head.as_bytes().to_vec();
    bytes.extend_from_slice(b"Zo\xeb");
    bytes.extend_from_slice(tail.as_bytes());
    let path = write_file(temp_dir.path(), "latin1.igc", bytes);

    let report = assemble_report(&path, &IgcAnalyzer::new(), &utc_options(false));
    let row = report.summary();

    assert_eq!(row.status, FlightStatus::Valid);
    assert_eq!(row.takeoff, "14/07/2023 10:00:01");
    assert_eq!(row.glides, Some(1));
    assert!(row.notes.is_empty());
    // Header extraction is strict and falls back to sentinels
    assert_eq!(report.pilot(), &PilotRecord::default());
}

#[test]
fn test_one_row_per_selected_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "valid.igc", straight_flight(200));
    write_file(temp_dir.path(), "short.igc", straight_flight(5));
    write_file(temp_dir.path(), "nodate.igc", "B1000004553000N00700000EA0100001040\n");
    write_file(temp_dir.path(), "readme.txt", "not a flight");

    let selection = select_files_in(temp_dir.path(), &[]).unwrap();
    assert_eq!(selection.existing.len(), 3);

    let analyzer = IgcAnalyzer::new();
    let mut statuses: Vec<String> = selection
        .existing
        .iter()
        .map(|path| {
            assemble_report(path, &analyzer, &utc_options(true))
                .summary()
                .status
                .to_string()
        })
        .collect();
    statuses.sort();

    assert_eq!(statuses, vec!["Exception", "Invalid", "Valid"]);
}

#[test]
fn test_header_only_non_marker_lines_gives_sentinels() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(
        temp_dir.path(),
        "body.igc",
        "AXCT123\nB1000004553000N00700000EA0100001040\nLXCTSOMETHING:else\n",
    );

    assert_eq!(read_pilot_record(&path), PilotRecord::default());
}

#[test]
fn test_cli_without_igc_files_prints_message() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_igc_report"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run igc_report");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "No IGC files found in current directory\n"
    );
}

#[test]
fn test_cli_reports_existing_and_warns_about_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_file(temp_dir.path(), "a.igc", straight_flight(200));

    let output = Command::new(env!("CARGO_BIN_EXE_igc_report"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["-f", "a.igc", "missing.igc"])
        .output()
        .expect("Failed to run igc_report");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("| Valid").count(), 1);
    assert!(stdout.contains("| a.igc"));
    assert!(!stdout.contains("missing.igc"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.igc"));
}

#[test]
fn test_cli_all_missing_stops_without_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_igc_report"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["--files", "gone.igc"])
        .output()
        .expect("Failed to run igc_report");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "No existing files to process\n"
    );
}
