pub const DEFAULT_REFERENCE_LOCALE: &str = "en-US";
pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/translate";
pub const DEFAULT_FORMAT: &str = "text";
pub const DEFAULT_ALTERNATIVES: u32 = 3;
pub const DEFAULT_THROTTLE_MS: u64 = 500;

pub const ENV_REFERENCE: &str = "LOCALE_SYNC_REFERENCE";
pub const ENV_SOURCE_LANG: &str = "LOCALE_SYNC_SOURCE_LANG";
pub const ENV_ENDPOINT: &str = "LOCALE_SYNC_ENDPOINT";
pub const ENV_API_KEY: &str = "LOCALE_SYNC_API_KEY";
pub const ENV_ALTERNATIVES: &str = "LOCALE_SYNC_ALTERNATIVES";
pub const ENV_THROTTLE_MS: &str = "LOCALE_SYNC_THROTTLE_MS";
