//! IGC Report Library
//!
//! A Rust library for summarizing IGC glider flight logs. Each log is
//! reported as a flight table (takeoff, landing, duration, maximum
//! altitude, thermal and glide counts) with the pilot and equipment details
//! from its header records beneath it, optionally followed by one table per
//! thermal and glide.
//!
//! # Features
//!
//! - **`cli`** (default): Build the `igc_report` command-line binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Report every IGC file in the current directory:
//! ```rust,no_run
//! use igc_report::{assemble_report, render_report, select_files, IgcAnalyzer, ReportOptions};
//!
//! let selection = select_files(&[]).unwrap();
//! let analyzer = IgcAnalyzer::new();
//! let options = ReportOptions { detailed: true, ..ReportOptions::default() };
//! for path in &selection.existing {
//!     let report = assemble_report(path, &analyzer, &options);
//!     print!("{}", render_report(&report));
//! }
//! ```
//!
//! Read only the pilot details:
//! ```rust,no_run
//! use igc_report::read_pilot_record;
//! use std::path::Path;
//!
//! let pilot = read_pilot_record(Path::new("flight.igc"));
//! println!("{} flying {}", pilot.pilot, pilot.glider);
//! ```
//!
//! # Public API
//!
//! ## Pipeline
//! - [`select_files`] / [`select_files_in`] - Resolve explicit paths or discover `*.igc` files
//! - [`read_pilot_record`] - Extract pilot and equipment header fields
//! - [`assemble_report`] - Analyze one file into a [`FileReport`]
//! - [`render_report`] - Render a [`FileReport`] as grid tables
//!
//! ## Analysis
//! - [`FlightAnalyzer`] - Seam between the report and flight analysis
//! - [`IgcAnalyzer`] - Built-in analyzer: takeoff/landing, thermals and glides
//! - [`parse_igc_fixes`] - Decode B records into [`Fix`] samples
//!
//! ## Formatting
//! - [`format_duration`] - Seconds to `HH:MM:SS`
//! - [`format_timestamp`] - Epoch seconds to `DD/MM/YYYY HH:MM:SS`
//! - [`render_grid`] - Bordered fixed-width table

// Module declarations
pub mod analysis;
pub mod conversion;
pub mod error;
pub mod parser;
pub mod report;
pub mod selection;
pub mod table;
pub mod types;

pub use analysis::*;
pub use conversion::*;
pub use error::{AnalysisError, Result};
pub use parser::*;
pub use report::*;
pub use selection::*;
pub use table::*;
pub use types::*;
