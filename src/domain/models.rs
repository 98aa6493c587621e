use crate::domain::constants::DEFAULT_UNIT_FILENAME;
use crate::domain::unit_type::UnitType;
use serde::{Deserialize, Serialize};

fn default_filename() -> String {
    DEFAULT_UNIT_FILENAME.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_filename")]
    pub default_filename: String,
    /// Directory `new` and `session` save into when `--dir` is not given.
    #[serde(default)]
    pub save_dir: Option<String>,
    #[serde(default = "default_true")]
    pub audit: bool,
    /// Reject sections/directives that are not in the catalog unless forced.
    #[serde(default = "default_true")]
    pub strict_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_filename: default_filename(),
            save_dir: None,
            audit: true,
            strict_catalog: true,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct DetectReport {
    pub filename: String,
    pub unit_type: UnitType,
    pub display_name: String,
    pub description: String,
    pub doc_key: String,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub directive: String,
    pub value: String,
    pub rule: String,
    pub valid: bool,
}

#[derive(Serialize)]
pub struct SectionItem {
    pub section: String,
    pub directives: Vec<String>,
}

#[derive(Serialize)]
pub struct HelpItem {
    pub directive: String,
    pub help: String,
}

#[derive(Serialize, Clone)]
pub struct SaveReport {
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
    pub unit_type: UnitType,
}

#[derive(Serialize)]
pub struct PreviewReport {
    pub detect: DetectReport,
    pub text: String,
}

#[derive(Serialize)]
pub struct InsertReport {
    pub section: String,
    pub directive: String,
    pub cursor: usize,
    pub saved: SaveReport,
}

#[derive(Serialize)]
pub struct TabPanel {
    pub tab: UnitType,
    pub display_name: String,
    pub description: String,
    pub doc_key: String,
    pub section: Option<String>,
    pub directives: Vec<String>,
}

#[derive(Serialize)]
pub struct SessionStatus {
    pub filename: String,
    pub unit_type: UnitType,
    pub display_name: String,
    pub active_tab: Option<UnitType>,
    pub section: Option<String>,
    pub directive: Option<String>,
    pub insert_enabled: bool,
    pub cursor: usize,
    pub chars: usize,
    pub help: Option<String>,
}
