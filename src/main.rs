//! CLI binary for IGC Report
//!
//! Prints a flight summary and pilot table for each IGC file given with
//! `--files`, or for every IGC file in the current directory.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use igc_report::{
    assemble_report, render_report, select_files, IgcAnalyzer, ReportOptions, TimeDisplay,
};
use log::{debug, warn};
use std::io::Write;

fn build_command() -> Command {
    Command::new("IGC Report")
        .version(concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("VERGEN_GIT_SHA"),
            ")"
        ))
        .about("List IGC glider flight logs: takeoff, landing, duration, altitude, thermals, glides and pilot details.")
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .help("IGC files to process (default: all .igc files in the current directory)")
                .value_name("FILE")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("long")
                .short('l')
                .long("long")
                .help("Show detailed thermals and glides for each valid flight")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    colog::init();

    let matches = build_command().get_matches();

    let options = ReportOptions {
        detailed: matches.get_flag("long"),
        time_zone: TimeDisplay::Local,
    };
    let requested: Vec<String> = matches
        .get_many::<String>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    debug!("Requested files: {requested:?}");

    let selection = select_files(&requested).context("Failed to resolve input files")?;

    if let Some(warning) = selection.missing_warning() {
        warn!("{warning}");
    }

    if selection.is_empty() {
        println!("{}", selection.empty_message());
        return Ok(());
    }

    debug!("Found {} files to process", selection.existing.len());

    let analyzer = IgcAnalyzer::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for path in &selection.existing {
        debug!("Processing: {}", path.display());
        let report = assemble_report(path, &analyzer, &options);
        write!(out, "{}", render_report(&report))?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_files_and_long_flags() {
        let matches = build_command()
            .try_get_matches_from(["igc_report", "-l", "-f", "a.igc", "missing.igc"])
            .unwrap();

        assert!(matches.get_flag("long"));
        let files: Vec<&String> = matches.get_many::<String>("files").unwrap().collect();
        assert_eq!(files, vec!["a.igc", "missing.igc"]);
    }

    #[test]
    fn test_defaults_without_flags() {
        let matches = build_command()
            .try_get_matches_from(["igc_report"])
            .unwrap();

        assert!(!matches.get_flag("long"));
        assert!(matches.get_many::<String>("files").is_none());
    }

    #[test]
    fn test_empty_files_flag_means_discovery() {
        let matches = build_command()
            .try_get_matches_from(["igc_report", "--files"])
            .unwrap();

        let files: Vec<String> = matches
            .get_many::<String>("files")
            .map(|files| files.cloned().collect())
            .unwrap_or_default();
        assert!(files.is_empty());
    }
}
