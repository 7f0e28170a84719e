use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::EnumString;

/// Nested key/value translations for one language. Mappings are
/// `Value::Object`; anything else is a leaf.
pub type LocaleTree = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LocaleFormat {
    Json,
    #[strum(serialize = "yaml", serialize = "yml")]
    Yaml,
}

impl LocaleFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub path: PathBuf,
    pub locale: String,
    pub format: LocaleFormat,
}

impl LocaleFile {
    /// Returns `None` for paths without a stem or with an extension that is
    /// not a supported locale format.
    pub fn from_path(path: &Path) -> Option<Self> {
        let format = LocaleFormat::from_path(path)?;
        let locale = path.file_stem()?.to_str()?.to_string();

        Some(Self {
            path: path.to_path_buf(),
            locale,
            format,
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.locale.clone())
    }
}
