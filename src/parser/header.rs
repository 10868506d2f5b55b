use crate::types::{PilotField, PilotRecord};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// IGC header-record keys and the pilot field each one fills
const HEADER_FIELDS: [(&str, PilotField); 9] = [
    ("HFFTYFRTYPE", PilotField::Device),
    ("HFRFWFIRMWAREVERSION", PilotField::Firmware),
    ("HFPRSPRESSALTSENSOR", PilotField::Sensor),
    ("HFPLTPILOTINCHARGE", PilotField::Pilot),
    ("HOSITSite", PilotField::Site),
    ("HOCCLCOMPETITION CLASS", PilotField::CompetitionClass),
    ("HFGTYGLIDERTYPE", PilotField::Glider),
    ("HODTM100GPSDATUM", PilotField::GpsDatum),
    ("HFALPALTPRESSURE", PilotField::PressureDatum),
];

fn lookup_field(key: &str) -> Option<PilotField> {
    HEADER_FIELDS
        .iter()
        .find(|(header_key, _)| *header_key == key)
        .map(|(_, field)| *field)
}

/// Apply one raw log line to the record; non-header and unknown lines are ignored
fn apply_header_line(record: &mut PilotRecord, line: &str) {
    let line = line.trim();
    if !line.starts_with('H') {
        return;
    }

    if let Some((key, value)) = line.split_once(':') {
        if let Some(field) = lookup_field(key) {
            *record.field_mut(field) = value.trim().to_string();
        }
    }
}

/// Extract pilot details from in-memory IGC text
pub fn parse_pilot_record_from_text(text: &str) -> PilotRecord {
    let mut record = PilotRecord::default();
    for line in text.lines() {
        apply_header_line(&mut record, line);
    }
    record
}

fn scan_pilot_record(path: &Path) -> std::io::Result<PilotRecord> {
    let reader = BufReader::new(File::open(path)?);
    let mut record = PilotRecord::default();
    for line in reader.lines() {
        apply_header_line(&mut record, &line?);
    }
    Ok(record)
}

/// Read pilot details from an IGC file.
///
/// Never fails: if the file cannot be read or decoded the error is logged
/// and every field is left as [`crate::NOT_AVAILABLE`].
pub fn read_pilot_record(path: &Path) -> PilotRecord {
    match scan_pilot_record(path) {
        Ok(record) => record,
        Err(e) => {
            warn!("Error reading header of {}: {}", path.display(), e);
            PilotRecord::default()
        }
    }
}
