use log::{debug, warn};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

use crate::models::locale_file::{LocaleFile, LocaleFormat, LocaleTree};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read locale directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("reference locale '{locale}' not found in {dir:?}")]
    MissingReference { locale: String, dir: PathBuf },
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse {path:?} as YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{path:?} does not contain a top-level mapping")]
    NotAMapping { path: PathBuf },
}

/// The reference file and the targets found in one locale directory.
#[derive(Debug)]
pub struct LocaleSet {
    pub reference: LocaleFile,
    pub targets: Vec<LocaleFile>,
}

pub struct LocaleRepository {
    pub dir: PathBuf,
}

impl LocaleRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Lists the supported locale files directly inside the directory,
    /// sorted by file name.
    pub fn list_files(&self) -> Result<Vec<LocaleFile>, RepositoryError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| RepositoryError::Directory {
                path: self.dir.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            match LocaleFile::from_path(entry.path()) {
                Some(file) => files.push(file),
                None => debug!("Ignoring {:?}: not a locale file", entry.path()),
            }
        }

        Ok(files)
    }

    /// Splits the directory into the reference file and every other locale.
    pub fn discover(&self, reference_locale: &str) -> Result<LocaleSet, RepositoryError> {
        let (references, targets): (Vec<_>, Vec<_>) = self
            .list_files()?
            .into_iter()
            .partition(|file| file.locale == reference_locale);

        let mut references = references.into_iter();
        let reference = references.next().ok_or_else(|| RepositoryError::MissingReference {
            locale: reference_locale.to_string(),
            dir: self.dir.clone(),
        })?;
        for extra in references {
            warn!(
                "Ignoring {}: {} is already the reference for '{}'",
                extra.file_name(),
                reference.file_name(),
                reference_locale
            );
        }

        Ok(LocaleSet { reference, targets })
    }

    pub fn load(&self, file: &LocaleFile) -> Result<LocaleTree, RepositoryError> {
        let content = fs::read_to_string(&file.path).map_err(|source| RepositoryError::Io {
            path: file.path.clone(),
            source,
        })?;

        parse_tree(&file.path, file.format, &content)
    }

    pub fn save(&self, file: &LocaleFile, tree: &LocaleTree) -> Result<(), RepositoryError> {
        let content = render_tree(&file.path, file.format, tree)?;

        fs::write(&file.path, content).map_err(|source| RepositoryError::Io {
            path: file.path.clone(),
            source,
        })
    }
}

fn parse_tree(
    path: &Path,
    format: LocaleFormat,
    content: &str,
) -> Result<LocaleTree, RepositoryError> {
    // An empty file is an empty locale, not a parse error.
    if content.trim().is_empty() {
        return Ok(LocaleTree::new());
    }

    let value: Value = match format {
        LocaleFormat::Json => {
            serde_json::from_str(content).map_err(|source| RepositoryError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        LocaleFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|source| RepositoryError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    match value {
        Value::Object(tree) => Ok(tree),
        Value::Null => Ok(LocaleTree::new()),
        _ => Err(RepositoryError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

fn render_tree(
    path: &Path,
    format: LocaleFormat,
    tree: &LocaleTree,
) -> Result<String, RepositoryError> {
    match format {
        LocaleFormat::Json => {
            let mut content =
                serde_json::to_string_pretty(tree).map_err(|source| RepositoryError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            content.push('\n');
            Ok(content)
        }
        LocaleFormat::Yaml => {
            serde_yaml::to_string(tree).map_err(|source| RepositoryError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discovers_reference_and_sorted_targets() {
        let dir = TempDir::new().unwrap();
        write(&dir, "fr.json", "{}");
        write(&dir, "en-US.json", "{}");
        write(&dir, "de.yaml", "");
        write(&dir, "README.md", "# locales");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write(&dir, "nested/it.json", "{}");

        let set = LocaleRepository::new(dir.path()).discover("en-US").unwrap();

        assert_eq!(set.reference.locale, "en-US");
        let targets: Vec<_> = set.targets.iter().map(|f| f.locale.as_str()).collect();
        assert_eq!(targets, ["de", "fr"]);
    }

    #[test]
    fn duplicate_reference_files_are_neither_reference_nor_target() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en-US.json", "{}");
        write(&dir, "en-US.yaml", "");
        write(&dir, "fr.json", "{}");

        let set = LocaleRepository::new(dir.path()).discover("en-US").unwrap();

        assert_eq!(set.reference.file_name(), "en-US.json");
        let targets: Vec<_> = set.targets.iter().map(|f| f.file_name()).collect();
        assert_eq!(targets, ["fr.json"]);
    }

    #[test]
    fn missing_reference_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "fr.json", "{}");

        let err = LocaleRepository::new(dir.path())
            .discover("en-US")
            .unwrap_err();

        assert!(matches!(err, RepositoryError::MissingReference { .. }));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let repo = LocaleRepository::new(dir.path().join("absent"));
        assert!(matches!(
            repo.discover("en-US"),
            Err(RepositoryError::Directory { .. })
        ));
    }

    #[test]
    fn json_round_trip_keeps_order_and_unicode() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ja.json", r#"{"zeta":"ゼータ","alpha":{"b":"ß","a":"à"}}"#);
        let repo = LocaleRepository::new(dir.path());
        let file = LocaleFile::from_path(&path).unwrap();

        let tree = repo.load(&file).unwrap();
        repo.save(&file, &tree).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert_eq!(
            written,
            "{\n  \"zeta\": \"ゼータ\",\n  \"alpha\": {\n    \"b\": \"ß\",\n    \"a\": \"à\"\n  }\n}\n"
        );
    }

    #[test]
    fn loads_and_saves_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "fr.yml", "menu:\n  open: Ouvrir\ntitle: Titre\n");
        let repo = LocaleRepository::new(dir.path());
        let file = LocaleFile::from_path(&path).unwrap();

        let mut tree = repo.load(&file).unwrap();
        assert_eq!(
            Value::Object(tree.clone()),
            json!({ "menu": { "open": "Ouvrir" }, "title": "Titre" })
        );

        tree.insert("extra".into(), json!("Été"));
        repo.save(&file, &tree).unwrap();
        let reloaded = repo.load(&file).unwrap();
        assert_eq!(reloaded, tree);
        let keys: Vec<_> = reloaded.keys().cloned().collect();
        assert_eq!(keys, ["menu", "title", "extra"]);
    }

    #[test]
    fn empty_files_are_empty_trees() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "fr.json", "  \n");
        let repo = LocaleRepository::new(dir.path());
        let file = LocaleFile::from_path(&path).unwrap();
        assert!(repo.load(&file).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_and_non_mapping_files() {
        let dir = TempDir::new().unwrap();
        let repo = LocaleRepository::new(dir.path());

        let broken = LocaleFile::from_path(&write(&dir, "fr.json", "{ not json")).unwrap();
        assert!(matches!(repo.load(&broken), Err(RepositoryError::Json { .. })));

        let list = LocaleFile::from_path(&write(&dir, "de.json", "[1, 2]")).unwrap();
        assert!(matches!(
            repo.load(&list),
            Err(RepositoryError::NotAMapping { .. })
        ));
    }
}
