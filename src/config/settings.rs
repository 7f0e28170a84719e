use clap::Parser;
use std::{path::PathBuf, time::Duration};

use crate::constants::{
    DEFAULT_ALTERNATIVES, DEFAULT_ENDPOINT, DEFAULT_FORMAT, DEFAULT_REFERENCE_LOCALE,
    DEFAULT_SOURCE_LANG, DEFAULT_THROTTLE_MS, ENV_ALTERNATIVES, ENV_API_KEY, ENV_ENDPOINT,
    ENV_REFERENCE, ENV_SOURCE_LANG, ENV_THROTTLE_MS,
};

/// Fill missing keys in locale files by translating them from the reference
/// locale.
#[derive(Debug, Parser)]
#[command(name = "locale_sync", version, about)]
pub struct Cli {
    /// Directory containing the locale files
    pub dir: PathBuf,

    /// Log the missing and translated trees of every file
    #[arg(short, long)]
    pub verbose: bool,

    /// Locale (file stem) of the reference file
    #[arg(long, env = ENV_REFERENCE, default_value = DEFAULT_REFERENCE_LOCALE)]
    pub reference: String,

    /// Language of the reference file sent to the translator
    #[arg(long, env = ENV_SOURCE_LANG, default_value = DEFAULT_SOURCE_LANG)]
    pub source_lang: String,

    /// Translation endpoint URL
    #[arg(long, env = ENV_ENDPOINT, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// API key for the translation service
    #[arg(long, env = ENV_API_KEY, default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Number of alternatives requested per translation
    #[arg(long, env = ENV_ALTERNATIVES, default_value_t = DEFAULT_ALTERNATIVES)]
    pub alternatives: u32,

    /// Pause after every translation request, in milliseconds
    #[arg(long, env = ENV_THROTTLE_MS, default_value_t = DEFAULT_THROTTLE_MS)]
    pub throttle_ms: u64,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorSettings {
    pub endpoint: String,
    pub api_key: String,
    pub format: String,
    pub alternatives: u32,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            format: DEFAULT_FORMAT.to_string(),
            alternatives: DEFAULT_ALTERNATIVES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    pub reference_locale: String,
    pub source_lang: String,
    pub throttle: Duration,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            reference_locale: DEFAULT_REFERENCE_LOCALE.to_string(),
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            throttle: Duration::from_millis(DEFAULT_THROTTLE_MS),
            dry_run: false,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub dir: PathBuf,
    pub sync: SyncSettings,
    pub translator: TranslatorSettings,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            dir: cli.dir,
            sync: SyncSettings {
                reference_locale: cli.reference,
                source_lang: cli.source_lang,
                throttle: Duration::from_millis(cli.throttle_ms),
                dry_run: cli.dry_run,
                verbose: cli.verbose,
            },
            translator: TranslatorSettings {
                endpoint: cli.endpoint,
                api_key: cli.api_key,
                alternatives: cli.alternatives,
                ..TranslatorSettings::default()
            },
        }
    }
}
