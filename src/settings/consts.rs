pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "bankist";
pub const APP_NAME: &str = "bankist";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "bankist.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
