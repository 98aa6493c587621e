use crate::domain::constants::CONFIG_DIR;
use crate::domain::models::{Config, SaveReport};
use crate::services::classify::{classify_path, detect_unit_type};
use crate::services::editor::EditorError;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(CONFIG_DIR).join("audit.jsonl");
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::debug!("cannot create audit dir {}: {}", parent.display(), e);
        }
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    if let Err(e) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()))
    {
        tracing::debug!("audit write to {} failed: {}", path.display(), e);
    }
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(CONFIG_DIR).join("config.toml"))
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(_) => return Ok(Config::default()),
        },
    };
    if !p.exists() {
        if explicit.is_some() {
            anyhow::bail!("config file not found: {}", p.display());
        }
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(&p)?;
    let config: Config = toml::from_str(&raw)?;
    tracing::debug!("loaded config from {}", p.display());
    Ok(config)
}

/// A unit file read from disk as text. Bytes that are not UTF-8 become U+FFFD.
pub struct LoadedUnit {
    pub name: String,
    pub contents: String,
}

pub fn load_unit(path: &Path) -> anyhow::Result<LoadedUnit> {
    let bytes = std::fs::read(path)?;
    let contents = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8; replacing bad bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    tracing::debug!("loaded {} as {}", path.display(), classify_path(path));
    Ok(LoadedUnit { name, contents })
}

/// Name a save will use: the trimmed field, or the default when blank.
pub fn resolve_save_name(field: &str, default_name: &str) -> Result<String, EditorError> {
    let trimmed = field.trim();
    let name = if trimmed.is_empty() {
        default_name.trim()
    } else {
        trimmed
    };
    if name.is_empty() || name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(EditorError::InvalidFilename(name.to_string()));
    }
    Ok(name.to_string())
}

pub fn save_unit(
    dir: &Path,
    name_field: &str,
    text: &str,
    default_name: &str,
) -> anyhow::Result<SaveReport> {
    let name = resolve_save_name(name_field, default_name)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&name);
    std::fs::write(&path, text)?;
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let report = SaveReport {
        path: path.to_string_lossy().to_string(),
        bytes: text.len(),
        sha256: hex::encode(hasher.finalize()),
        unit_type: detect_unit_type(&name),
    };
    tracing::info!("saved {} ({} bytes)", report.path, report.bytes);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit_type::UnitType;
    use tempfile::TempDir;

    #[test]
    fn blank_name_falls_back_to_default() {
        assert_eq!(resolve_save_name("   ", "unit.service").unwrap(), "unit.service");
        assert_eq!(resolve_save_name(" a.timer ", "unit.service").unwrap(), "a.timer");
    }

    #[test]
    fn names_with_separators_are_refused() {
        assert!(resolve_save_name("../x.service", "unit.service").is_err());
        assert!(resolve_save_name("", "").is_err());
    }

    #[test]
    fn save_writes_text_and_reports_digest() {
        let tmp = TempDir::new().unwrap();
        let report = save_unit(tmp.path(), "", "[Unit]\n", "unit.service").unwrap();
        assert_eq!(report.unit_type, UnitType::Service);
        assert_eq!(report.bytes, 7);
        assert_eq!(report.sha256.len(), 64);
        let written = std::fs::read_to_string(tmp.path().join("unit.service")).unwrap();
        assert_eq!(written, "[Unit]\n");
    }

    #[test]
    fn load_replaces_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("bad.service");
        std::fs::write(&p, b"[Unit]\xff\n").unwrap();
        let loaded = load_unit(&p).unwrap();
        assert_eq!(loaded.name, "bad.service");
        assert_eq!(loaded.contents, "[Unit]\u{FFFD}\n");
    }

    #[test]
    fn audit_creates_its_directory_under_home() {
        let tmp = TempDir::new().unwrap();
        let prev = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());
        audit("load", serde_json::json!({"file": "a.timer"}));
        match prev {
            Some(h) => std::env::set_var("HOME", h),
            None => std::env::remove_var("HOME"),
        }
        let log = std::fs::read_to_string(tmp.path().join(CONFIG_DIR).join("audit.jsonl")).unwrap();
        let event: serde_json::Value = serde_json::from_str(log.trim()).unwrap();
        assert_eq!(event["action"], "load");
        assert_eq!(event["data"]["file"], "a.timer");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(Some(&tmp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn config_fields_default_individually() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("config.toml");
        std::fs::write(&p, "audit = false\n").unwrap();
        let c = load_config(Some(&p)).unwrap();
        assert!(!c.audit);
        assert!(c.strict_catalog);
        assert_eq!(c.default_filename, "unit.service");
    }
}
