/// Filename used when the save name field is blank.
pub const DEFAULT_UNIT_FILENAME: &str = "unit.service";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SDCONF_LOG";

pub const CONFIG_DIR: &str = ".config/sdconf";
