/// Application name, used for config directories.
pub const APP_NAME: &str = "dotscan";

/// Settings file looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "dotscan.json";

/// Settings file looked up in the user config directory.
pub const USER_SETTINGS_FILE: &str = "config.json";

/// Settings key listing explicit assemblies to scan.
pub const ASSEMBLIES_PROPERTY: &str = "assemblies";

/// Build configuration used when none is configured.
pub const DEFAULT_BUILD_CONFIGURATION: &str = "Debug";

/// Environment variable overriding the NDeps executable.
pub const NDEPS_EXECUTABLE_ENV: &str = "DOTSCAN_NDEPS_EXECUTABLE";

/// Environment variable overriding the Gallio executable.
pub const GALLIO_EXECUTABLE_ENV: &str = "DOTSCAN_GALLIO_EXECUTABLE";
