//! Application-wide constants.

/// Human-readable application name.
pub const APP_NAME: &str = "CabinMap";

/// Binary name used in usage hints.
pub const APP_BINARY_NAME: &str = "cabinmap";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "CabinMap";

/// Environment variable overriding the whole config directory.
pub const CONFIG_DIR_ENV: &str = "CABINMAP_CONFIG_DIR";

/// Largest supported cabin row count.
pub const MAX_ROW_COUNT: u32 = 99;

/// Template key that keeps the current parameters untouched.
pub const CUSTOM_TEMPLATE_KEY: &str = "custom";
