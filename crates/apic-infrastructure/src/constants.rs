//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "apic.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "apic";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "APIC";

/// Separator between nested keys in environment variables (`APIC_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_FILTER: &str = "APIC_LOG";

/// File name prefix for rotated log files
pub const LOG_FILE_PREFIX: &str = "apic";
