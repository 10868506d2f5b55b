#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder for any value that could not be determined
pub const NOT_AVAILABLE: &str = "N/A";

/// Pilot and equipment details read from the IGC header records
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PilotRecord {
    pub pilot: String,
    pub glider: String,
    pub competition_class: String,
    pub site: String,
    pub device: String,
    pub sensor: String,
    pub firmware: String,
    pub gps_datum: String,
    /// Usually ISA, the International Standard Atmosphere (1013.25 hPa)
    pub pressure_datum: String,
}

/// Slot of a [`PilotRecord`] that a header key writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotField {
    Pilot,
    Glider,
    CompetitionClass,
    Site,
    Device,
    Sensor,
    Firmware,
    GpsDatum,
    PressureDatum,
}

impl PilotRecord {
    pub const HEADERS: [&'static str; 9] = [
        "Pilot",
        "Glider",
        "Class",
        "Site",
        "Device",
        "Sensor",
        "Firmware",
        "GPS Datum",
        "Pressure Datum",
    ];

    pub fn field_mut(&mut self, field: PilotField) -> &mut String {
        match field {
            PilotField::Pilot => &mut self.pilot,
            PilotField::Glider => &mut self.glider,
            PilotField::CompetitionClass => &mut self.competition_class,
            PilotField::Site => &mut self.site,
            PilotField::Device => &mut self.device,
            PilotField::Sensor => &mut self.sensor,
            PilotField::Firmware => &mut self.firmware,
            PilotField::GpsDatum => &mut self.gps_datum,
            PilotField::PressureDatum => &mut self.pressure_datum,
        }
    }

    /// Table cells in [`PilotRecord::HEADERS`] order
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.pilot.clone(),
            self.glider.clone(),
            self.competition_class.clone(),
            self.site.clone(),
            self.device.clone(),
            self.sensor.clone(),
            self.firmware.clone(),
            self.gps_datum.clone(),
            self.pressure_datum.clone(),
        ]
    }
}

impl Default for PilotRecord {
    fn default() -> Self {
        Self {
            pilot: NOT_AVAILABLE.to_string(),
            glider: NOT_AVAILABLE.to_string(),
            competition_class: NOT_AVAILABLE.to_string(),
            site: NOT_AVAILABLE.to_string(),
            device: NOT_AVAILABLE.to_string(),
            sensor: NOT_AVAILABLE.to_string(),
            firmware: NOT_AVAILABLE.to_string(),
            gps_datum: NOT_AVAILABLE.to_string(),
            pressure_datum: NOT_AVAILABLE.to_string(),
        }
    }
}
