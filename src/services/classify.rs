use crate::domain::models::DetectReport;
use crate::domain::unit_type::{unit_type_info, UnitType};
use std::path::Path;

/// Maps a filename to the unit type named by its final dot-extension.
///
/// Matching is case-sensitive and only the last extension counts, so
/// `app.service.bak` is `Unknown`. Empty input, no dot, or an unrecognized
/// extension all yield `UnitType::Unknown`.
pub fn detect_unit_type(filename: &str) -> UnitType {
    match filename.rsplit_once('.') {
        Some((_, ext)) => UnitType::from_tag(ext),
        None => UnitType::Unknown,
    }
}

/// Classifies the final component of a path.
pub fn classify_path(path: &Path) -> UnitType {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(detect_unit_type)
        .unwrap_or(UnitType::Unknown)
}

/// Classification plus the display text shown for the resulting tag.
pub fn describe(filename: &str) -> DetectReport {
    let unit_type = detect_unit_type(filename);
    let info = unit_type_info(unit_type);
    DetectReport {
        filename: filename.to_string(),
        unit_type,
        display_name: info.display_name.to_string(),
        description: info.description.to_string(),
        doc_key: info.doc_key.to_string(),
    }
}
