use crate::types::PilotRecord;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of processing one flight log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightStatus {
    Valid,
    Invalid,
    /// The analyzer failed on the file
    Exception,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Valid => write!(f, "Valid"),
            FlightStatus::Invalid => write!(f, "Invalid"),
            FlightStatus::Exception => write!(f, "Exception"),
        }
    }
}

/// One line of the flight summary table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightSummaryRow {
    pub file: String,
    pub status: FlightStatus,
    pub takeoff: String,
    pub landing: String,
    pub duration: String,
    pub max_alt: String,
    /// `None` renders as an empty cell
    pub thermals: Option<usize>,
    pub glides: Option<usize>,
    pub notes: String,
}

impl FlightSummaryRow {
    pub const HEADERS: [&'static str; 9] = [
        "File",
        "Status",
        "Takeoff",
        "Landing",
        "Duration",
        "Max Alt (m)",
        "Thermals",
        "Glides",
        "Notes",
    ];

    pub const EXCEPTION_HEADERS: [&'static str; 9] = [
        "File",
        "Status",
        "Takeoff",
        "Landing",
        "Duration",
        "Max Alt (m)",
        "Thermals",
        "Glides",
        "Notes/Exception",
    ];

    /// Row for a file the analyzer could not process; only the notes are filled in
    pub fn exception(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            status: FlightStatus::Exception,
            takeoff: String::new(),
            landing: String::new(),
            duration: String::new(),
            max_alt: String::new(),
            thermals: None,
            glides: None,
            notes: message.into(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        let count = |value: Option<usize>| value.map(|n| n.to_string()).unwrap_or_default();
        vec![
            self.file.clone(),
            self.status.to_string(),
            self.takeoff.clone(),
            self.landing.clone(),
            self.duration.clone(),
            self.max_alt.clone(),
            count(self.thermals),
            count(self.glides),
            self.notes.clone(),
        ]
    }
}

/// Formatted details of one thermal
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermalRow {
    pub start: String,
    pub end: String,
    pub duration: String,
    pub alt_gain: String,
    pub avg_vario: String,
}

impl ThermalRow {
    pub const HEADERS: [&'static str; 5] = [
        "Start Time",
        "End Time",
        "Duration",
        "Alt Gain (m)",
        "Avg Vario (m/s)",
    ];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.start.clone(),
            self.end.clone(),
            self.duration.clone(),
            self.alt_gain.clone(),
            self.avg_vario.clone(),
        ]
    }
}

/// Formatted details of one glide
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlideRow {
    pub start: String,
    pub end: String,
    pub duration: String,
    pub distance: String,
    pub avg_speed: String,
    pub glide_ratio: String,
}

impl GlideRow {
    pub const HEADERS: [&'static str; 6] = [
        "Start Time",
        "End Time",
        "Duration",
        "Distance (km)",
        "Avg Speed (km/h)",
        "Glide Ratio",
    ];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.start.clone(),
            self.end.clone(),
            self.duration.clone(),
            self.distance.clone(),
            self.avg_speed.clone(),
            self.glide_ratio.clone(),
        ]
    }
}

/// Everything reported for a single input file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileReport {
    /// Analysis failed; the pilot record is kept but never rendered
    Exception {
        row: FlightSummaryRow,
        pilot: PilotRecord,
    },
    Analyzed {
        row: FlightSummaryRow,
        pilot: PilotRecord,
        /// `Some` only in detailed mode for a valid flight
        thermals: Option<Vec<ThermalRow>>,
        glides: Option<Vec<GlideRow>>,
    },
}

impl FileReport {
    pub fn summary(&self) -> &FlightSummaryRow {
        match self {
            FileReport::Exception { row, .. } | FileReport::Analyzed { row, .. } => row,
        }
    }

    pub fn pilot(&self) -> &PilotRecord {
        match self {
            FileReport::Exception { pilot, .. } | FileReport::Analyzed { pilot, .. } => pilot,
        }
    }
}
